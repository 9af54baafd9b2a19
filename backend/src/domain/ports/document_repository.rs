//! Port for document persistence.
//!
//! Adapters must enforce title uniqueness themselves (a unique index or an
//! equivalent check under lock) and report collisions as
//! [`DocumentRepositoryError::DuplicateTitle`]. The service checks titles
//! before writing, but only the store can close the race between two
//! concurrent writers.

use async_trait::async_trait;

use crate::domain::{Document, DocumentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by document repository adapters.
    pub enum DocumentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "document repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "document repository query failed: {message}",
        /// The store rejected a write because the title is taken.
        DuplicateTitle { title: String } =>
            "document title already exists: {title}",
    }
}

/// Port for document storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find_by_id(&self, id: &DocumentId)
    -> Result<Option<Document>, DocumentRepositoryError>;

    /// Exact, case-sensitive title lookup.
    async fn find_by_title(&self, title: &str)
    -> Result<Option<Document>, DocumentRepositoryError>;

    /// Every stored document, oldest first.
    async fn find_all(&self) -> Result<Vec<Document>, DocumentRepositoryError>;

    /// Insert or replace the document with the same id.
    async fn save(&self, document: &Document) -> Result<Document, DocumentRepositoryError>;

    /// Insert every document or none of them. Returns the stored documents in
    /// input order.
    async fn save_all(
        &self,
        documents: &[Document],
    ) -> Result<Vec<Document>, DocumentRepositoryError>;
}
