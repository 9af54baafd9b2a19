//! In-memory [`DocumentRepository`] adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{DocumentRepository, DocumentRepositoryError};
use crate::domain::{Document, DocumentId};

/// Document store holding records in insertion order.
///
/// Title uniqueness is checked under the write lock, mirroring the unique
/// index of the PostgreSQL schema.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentRepository {
    /// Seed the store with existing documents.
    pub fn with_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        Self {
            documents: RwLock::new(documents.into_iter().collect()),
        }
    }
}

fn title_taken(stored: &[Document], candidate: &Document) -> bool {
    stored
        .iter()
        .any(|doc| doc.title() == candidate.title() && doc.id() != candidate.id())
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentRepositoryError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| doc.id() == id).cloned())
    }

    async fn find_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Document>, DocumentRepositoryError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| doc.title() == title).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Document>, DocumentRepositoryError> {
        Ok(self.documents.read().await.clone())
    }

    async fn save(&self, document: &Document) -> Result<Document, DocumentRepositoryError> {
        let mut documents = self.documents.write().await;
        if title_taken(&documents, document) {
            return Err(DocumentRepositoryError::duplicate_title(document.title()));
        }
        match documents.iter_mut().find(|doc| doc.id() == document.id()) {
            Some(existing) => *existing = document.clone(),
            None => documents.push(document.clone()),
        }
        Ok(document.clone())
    }

    async fn save_all(
        &self,
        batch: &[Document],
    ) -> Result<Vec<Document>, DocumentRepositoryError> {
        let mut documents = self.documents.write().await;
        for (position, document) in batch.iter().enumerate() {
            let clashes_with_sibling = batch[..position]
                .iter()
                .any(|earlier| earlier.title() == document.title());
            if clashes_with_sibling || title_taken(&documents, document) {
                return Err(DocumentRepositoryError::duplicate_title(document.title()));
            }
        }
        documents.extend(batch.iter().cloned());
        Ok(batch.to_vec())
    }
}
