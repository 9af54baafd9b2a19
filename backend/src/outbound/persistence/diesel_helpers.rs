//! Diesel error mapping shared by the repositories.

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{DocumentRepositoryError, UserRepositoryError};

use super::pool::PoolError;

pub(super) const DOCUMENTS_TITLE_KEY: &str = "documents_title_key";
pub(super) const USERS_EMAIL_KEY: &str = "users_email_key";

/// A unique violation on `constraint`, if that is what `error` is.
fn unique_violation<'e>(
    error: &'e DieselError,
    constraint: &str,
) -> Option<&'e (dyn DatabaseErrorInformation + Send + Sync)> {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if info.constraint_name() == Some(constraint) =>
        {
            Some(info.as_ref())
        }
        _ => None,
    }
}

/// Pull the offending value out of PostgreSQL's
/// `Key (column)=(value) already exists.` detail line.
pub(super) fn duplicate_key_value(details: &str) -> Option<&str> {
    let (_, rest) = details.split_once(")=(")?;
    let (value, _) = rest.rsplit_once(") already exists")?;
    Some(value)
}

fn log_failure(error: &DieselError, operation: &str) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }
}

pub(super) fn map_document_pool_error(error: PoolError) -> DocumentRepositoryError {
    DocumentRepositoryError::connection(error.message())
}

pub(super) fn map_user_pool_error(error: PoolError) -> UserRepositoryError {
    UserRepositoryError::connection(error.message())
}

/// Map a Diesel failure on the documents table. `fallback_title` names the
/// title when the server omits the key detail.
pub(super) fn map_document_error(
    error: DieselError,
    operation: &str,
    fallback_title: &str,
) -> DocumentRepositoryError {
    log_failure(&error, operation);
    if let Some(info) = unique_violation(&error, DOCUMENTS_TITLE_KEY) {
        let title = info
            .details()
            .and_then(duplicate_key_value)
            .unwrap_or(fallback_title);
        return DocumentRepositoryError::duplicate_title(title);
    }
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            DocumentRepositoryError::connection(info.message())
        }
        other => DocumentRepositoryError::query(other.to_string()),
    }
}

/// Map a Diesel failure on the users table.
pub(super) fn map_user_error(
    error: DieselError,
    operation: &str,
    email: &str,
) -> UserRepositoryError {
    log_failure(&error, operation);
    if unique_violation(&error, USERS_EMAIL_KEY).is_some() {
        return UserRepositoryError::duplicate_email(email);
    }
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserRepositoryError::connection(info.message())
        }
        other => UserRepositoryError::query(other.to_string()),
    }
}
