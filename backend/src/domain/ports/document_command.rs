//! Driving port for document writes.
//!
//! HTTP handlers call [`DocumentCommand`] after parsing requests; every rule
//! about titles, owners and lifecycle state lives behind it.

use async_trait::async_trait;

use crate::domain::{Document, DocumentChanges, DocumentId, DocumentStatus, Error, UserId};

/// Request to create one document.
///
/// Every field is optional on the wire; absent required fields are rule
/// failures so a batch can report them next to its other violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDocumentRequest {
    /// Required; `None` is reported as a missing field.
    pub title: Option<String>,
    /// Required; `None` is reported as a missing field.
    pub text: Option<String>,
    /// Required; `None` is reported as a missing field.
    pub owner_id: Option<UserId>,
    /// Initial status; defaults to `DRAFT`.
    pub status: Option<DocumentStatus>,
}

/// Request to update an existing document. Absent fields keep stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    pub status: Option<DocumentStatus>,
    /// May restate the current owner; any other value is rejected.
    pub owner_id: Option<UserId>,
}

impl UpdateDocumentRequest {
    /// The lifecycle changes this request asks for.
    pub fn changes(&self) -> DocumentChanges {
        DocumentChanges {
            title: self.title.clone(),
            text: self.text.clone(),
            status: self.status,
        }
    }
}

/// Driving port for creating and updating documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentCommand: Send + Sync {
    /// Create one document, failing on the first violated rule.
    async fn create_document(&self, request: CreateDocumentRequest) -> Result<Document, Error>;

    /// Create every document or none. Failures from all requests are
    /// reported together, each tagged with its request index.
    async fn create_documents(
        &self,
        requests: Vec<CreateDocumentRequest>,
    ) -> Result<Vec<Document>, Error>;

    /// Update one document, reporting every violated rule.
    async fn update_document(
        &self,
        id: DocumentId,
        request: UpdateDocumentRequest,
    ) -> Result<Document, Error>;
}
