//! PostgreSQL-backed [`UserRepository`] adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

use super::diesel_helpers::{map_user_error, map_user_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed user store. Emails are unique (`users_email_key`).
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::from_parts(
            UserId::from_uuid(row.id),
            row.email,
            row.code,
            row.first_name,
            row.last_name,
            row.phone_number,
        )
    }
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            email: user.email(),
            code: user.code(),
            first_name: user.first_name(),
            last_name: user.last_name(),
            phone_number: user.phone_number(),
        }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;
        let row = users::table
            .find(*id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_user_error(err, "find user by id", ""))?;
        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;
        let rows = users::table
            .order((users::created_at.asc(), users::seq.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_user_error(err, "list users", ""))?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn save(&self, user: &User) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;
        let row = NewUserRow::from(user);
        let stored = diesel::insert_into(users::table)
            .values(&row)
            .on_conflict(users::id)
            .do_update()
            .set(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_user_error(err, "save user", user.email()))?;
        Ok(User::from(stored))
    }
}
