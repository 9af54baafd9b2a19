//! Driving port for document reads.

use async_trait::async_trait;

use crate::domain::{Document, Error};

/// Read-only access to documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentQuery: Send + Sync {
    /// Every document, oldest first.
    async fn list_documents(&self) -> Result<Vec<Document>, Error>;
}
