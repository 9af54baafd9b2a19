//! PostgreSQL-backed [`DocumentRepository`] adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{DocumentRepository, DocumentRepositoryError};
use crate::domain::{Document, DocumentId, DocumentStatus, UserId};

use super::diesel_helpers::{map_document_error, map_document_pool_error};
use super::models::{DocumentChangeset, DocumentRow, NewDocumentRow};
use super::pool::DbPool;
use super::schema::documents;

/// Diesel-backed document store.
///
/// Title uniqueness is enforced by the `documents_title_key` index; a
/// violation surfaces as [`DocumentRepositoryError::DuplicateTitle`].
#[derive(Clone)]
pub struct DieselDocumentRepository {
    pool: DbPool,
}

impl DieselDocumentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TryFrom<DocumentRow> for Document {
    type Error = DocumentRepositoryError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<DocumentStatus>()
            .map_err(|err| DocumentRepositoryError::query(err.to_string()))?;
        Ok(Self::new(
            DocumentId::from_uuid(row.id),
            row.title,
            row.text,
            status,
            UserId::from_uuid(row.owner_id),
        ))
    }
}

impl<'a> From<&'a Document> for NewDocumentRow<'a> {
    fn from(document: &'a Document) -> Self {
        Self {
            id: *document.id().as_uuid(),
            title: document.title(),
            text: document.text(),
            status: document.status().as_str(),
            owner_id: *document.owner_id().as_uuid(),
        }
    }
}

fn into_documents(rows: Vec<DocumentRow>) -> Result<Vec<Document>, DocumentRepositoryError> {
    rows.into_iter().map(Document::try_from).collect()
}

#[async_trait]
impl DocumentRepository for DieselDocumentRepository {
    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_document_pool_error)?;
        let row = documents::table
            .find(*id.as_uuid())
            .select(DocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_document_error(err, "find document by id", ""))?;
        row.map(Document::try_from).transpose()
    }

    async fn find_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Document>, DocumentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_document_pool_error)?;
        let row = documents::table
            .filter(documents::title.eq(title))
            .select(DocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_document_error(err, "find document by title", title))?;
        row.map(Document::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Document>, DocumentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_document_pool_error)?;
        let rows = documents::table
            .order((documents::created_at.asc(), documents::seq.asc()))
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_document_error(err, "list documents", ""))?;
        into_documents(rows)
    }

    async fn save(&self, document: &Document) -> Result<Document, DocumentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_document_pool_error)?;
        let row = NewDocumentRow::from(document);
        let changes = DocumentChangeset {
            title: row.title,
            text: row.text,
            status: row.status,
        };
        let stored = diesel::insert_into(documents::table)
            .values(&row)
            .on_conflict(documents::id)
            .do_update()
            .set(&changes)
            .returning(DocumentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_document_error(err, "save document", document.title()))?;
        debug!(document_id = %document.id(), "document row written");
        Document::try_from(stored)
    }

    async fn save_all(
        &self,
        batch: &[Document],
    ) -> Result<Vec<Document>, DocumentRepositoryError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_document_pool_error)?;
        let rows: Vec<NewDocumentRow<'_>> = batch.iter().map(NewDocumentRow::from).collect();
        let fallback_title = batch.first().map(Document::title).unwrap_or_default();

        // One multi-row INSERT inside a transaction: a title clash on any row
        // rolls back the whole batch.
        let stored = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(documents::table)
                        .values(&rows)
                        .on_conflict(documents::id)
                        .do_update()
                        .set((
                            documents::title.eq(excluded(documents::title)),
                            documents::text.eq(excluded(documents::text)),
                            documents::status.eq(excluded(documents::status)),
                        ))
                        .returning(DocumentRow::as_returning())
                        .get_results(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_document_error(err, "save document batch", fallback_title))?;

        let mut saved = into_documents(stored)?;
        // RETURNING order is not guaranteed; restore input order.
        saved.sort_by_key(|doc| batch.iter().position(|input| input.id() == doc.id()));
        debug!(count = saved.len(), "document batch written");
        Ok(saved)
    }
}
