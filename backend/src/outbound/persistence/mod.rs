//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between internal row structs (`models.rs`,
//! `schema.rs`) and domain types; no rule evaluation happens here. Unique
//! indexes on `documents.title` and `users.email` back the domain's
//! uniqueness checks against concurrent writers.
//!
//! ```no_run
//! # async fn connect() -> Result<(), drafts::outbound::persistence::PoolError> {
//! use drafts::outbound::persistence::{DbPool, DieselDocumentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/drafts")).await?;
//! let documents = DieselDocumentRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_document_repository;
mod diesel_helpers;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_document_repository::DieselDocumentRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::run_pending_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
