//! In-process repositories backed by locked vectors.
//!
//! Used when no database URL is configured and by the integration tests.
//! Both stores keep insertion order, so `find_all` returns the oldest record
//! first just like the PostgreSQL adapters.

mod document_repository;
mod user_repository;

pub use document_repository::InMemoryDocumentRepository;
pub use user_repository::InMemoryUserRepository;
