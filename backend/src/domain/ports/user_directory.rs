//! Driving port for the user directory.
//!
//! Users are managed here, never by the document engine.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// List, fetch and register users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Fails with `not_found` when no user has `id`.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Validate `draft` and store it under a fresh id.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;
}
