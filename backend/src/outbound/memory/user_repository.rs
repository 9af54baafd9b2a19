//! In-memory [`UserRepository`] adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// User store holding records in insertion order with unique emails.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Seed the store with existing users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users.read().await.clone())
    }

    async fn save(&self, user: &User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;
        let email_taken = users
            .iter()
            .any(|existing| existing.email() == user.email() && existing.id() != user.id());
        if email_taken {
            return Err(UserRepositoryError::duplicate_email(user.email()));
        }
        match users.iter_mut().find(|existing| existing.id() == user.id()) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::from_parts(
            UserId::random(),
            email.to_owned(),
            "ada".to_owned(),
            "Ada".to_owned(),
            "Lovelace".to_owned(),
            None,
        )
    }

    #[actix_web::test]
    async fn saves_and_finds_users() {
        let repo = InMemoryUserRepository::default();
        let ada = user("ada@example.com");
        repo.save(&ada).await.expect("saved");

        let found = repo.find_by_id(ada.id()).await.expect("lookup");
        assert_eq!(found, Some(ada));
        assert!(repo.find_by_id(&UserId::random()).await.expect("lookup").is_none());
    }

    #[actix_web::test]
    async fn rejects_duplicate_email() {
        let repo = InMemoryUserRepository::with_users([user("ada@example.com")]);
        let err = repo
            .save(&user("ada@example.com"))
            .await
            .expect_err("email taken");
        assert_eq!(err, UserRepositoryError::duplicate_email("ada@example.com"));
        assert_eq!(repo.find_all().await.expect("list").len(), 1);
    }
}
