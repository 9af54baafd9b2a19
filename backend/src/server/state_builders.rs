//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use drafts::domain::ports::{DocumentRepository, UserRepository};
use drafts::domain::{DocumentLifecycleService, UserDirectoryService};
use drafts::inbound::http::state::HttpState;
use drafts::outbound::memory::{InMemoryDocumentRepository, InMemoryUserRepository};
use drafts::outbound::persistence::{DieselDocumentRepository, DieselUserRepository};
use tracing::info;

use super::ServerConfig;

/// Wire both services over one pair of stores.
fn build_services<D, U>(documents: Arc<D>, users: Arc<U>) -> HttpState
where
    D: DocumentRepository + 'static,
    U: UserRepository + 'static,
{
    let lifecycle = Arc::new(DocumentLifecycleService::new(documents, Arc::clone(&users)));
    let directory = Arc::new(UserDirectoryService::new(users));
    HttpState::new(lifecycle.clone(), lifecycle, directory)
}

/// Use PostgreSQL stores when a pool is configured, memory otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL stores");
            build_services(
                Arc::new(DieselDocumentRepository::new(pool.clone())),
                Arc::new(DieselUserRepository::new(pool.clone())),
            )
        }
        None => {
            info!("no database configured; using in-memory stores");
            build_services(
                Arc::new(InMemoryDocumentRepository::default()),
                Arc::new(InMemoryUserRepository::default()),
            )
        }
    };
    web::Data::new(state)
}
