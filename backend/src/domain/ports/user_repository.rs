//! Port for user persistence.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// Another user already registered this email.
        DuplicateEmail { email: String } =>
            "user email already registered: {email}",
    }
}

/// Port for user storage and retrieval.
///
/// The document engine only calls [`UserRepository::find_by_id`]; listing and
/// saving serve the user directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Every stored user, oldest first.
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    async fn save(&self, user: &User) -> Result<User, UserRepositoryError>;
}
