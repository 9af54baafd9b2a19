//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DocumentCommand, DocumentQuery, UserDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub documents: Arc<dyn DocumentCommand>,
    pub documents_query: Arc<dyn DocumentQuery>,
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use drafts::domain::{DocumentLifecycleService, UserDirectoryService};
    /// use drafts::inbound::http::state::HttpState;
    /// use drafts::outbound::memory::{InMemoryDocumentRepository, InMemoryUserRepository};
    ///
    /// let documents = Arc::new(InMemoryDocumentRepository::default());
    /// let users = Arc::new(InMemoryUserRepository::default());
    /// let lifecycle = Arc::new(DocumentLifecycleService::new(documents, users.clone()));
    /// let state = HttpState::new(
    ///     lifecycle.clone(),
    ///     lifecycle,
    ///     Arc::new(UserDirectoryService::new(users)),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn new(
        documents: Arc<dyn DocumentCommand>,
        documents_query: Arc<dyn DocumentQuery>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            documents,
            documents_query,
            users,
        }
    }
}
