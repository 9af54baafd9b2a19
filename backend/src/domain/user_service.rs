//! User directory service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{UserDirectory, UserRepository, UserRepositoryError};
use crate::domain::validation::USER;
use crate::domain::{Error, User, UserDraft, UserId, ValidationError, ValidationErrors};

/// Service implementing [`UserDirectory`] over a [`UserRepository`].
pub struct UserDirectoryService<U: ?Sized> {
    users: Arc<U>,
}

impl<U: ?Sized> Clone for UserDirectoryService<U> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<U: ?Sized> UserDirectoryService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

impl<U> UserDirectoryService<U>
where
    U: UserRepository + ?Sized,
{
    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserRepositoryError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserRepositoryError::DuplicateEmail { email } => {
                Error::conflict(format!("User with email {email} already exists")).with_details(
                    json!({ "field": "email", "value": email, "code": "duplicate_email" }),
                )
            }
        }
    }
}

#[async_trait]
impl<U> UserDirectory for UserDirectoryService<U>
where
    U: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.find_all().await.map_err(Self::map_user_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(&id)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| ValidationErrors::from(ValidationError::not_found(USER, "id", id)).into())
    }

    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let user = draft.into_user(UserId::random()).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": err.field(),
                "code": "invalid_user",
            }))
        })?;
        let saved = self.users.save(&user).await.map_err(Self::map_user_error)?;
        info!(user_id = %saved.id(), "user registered");
        Ok(saved)
    }
}
