//! Users who own documents.
//!
//! The document engine only ever checks that an owner exists; profile fields
//! are carried for the user directory.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while building users and user identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    InvalidEmail,
    EmptyCode,
    EmptyFirstName,
    EmptyLastName,
}

impl UserValidationError {
    /// Request field the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId | Self::InvalidId => "id",
            Self::InvalidEmail => "email",
            Self::EmptyCode => "code",
            Self::EmptyFirstName => "firstName",
            Self::EmptyLastName => "lastName",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::EmptyCode => write!(f, "code must not be empty"),
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from text.
    ///
    /// # Examples
    /// ```
    /// use drafts::domain::UserId;
    ///
    /// let id = UserId::new("a77e71c1-99d9-4804-be9b-e26cf4380981").expect("valid id");
    /// assert_eq!(id.to_string(), "a77e71c1-99d9-4804-be9b-e26cf4380981");
    /// assert!(UserId::new("U9").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-validated UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated profile supplied when registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub email: String,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
}

impl UserDraft {
    /// Validate the draft and bind it to `id`.
    ///
    /// # Examples
    /// ```
    /// use drafts::domain::{UserDraft, UserId};
    ///
    /// let draft = UserDraft {
    ///     email: "johndoe@email.com".into(),
    ///     code: "A00369982".into(),
    ///     first_name: "John".into(),
    ///     last_name: "Doe".into(),
    ///     phone_number: None,
    /// };
    /// let user = draft.into_user(UserId::random()).expect("valid draft");
    /// assert_eq!(user.email(), "johndoe@email.com");
    /// ```
    pub fn into_user(self, id: UserId) -> Result<User, UserValidationError> {
        let email = self.email.trim();
        let has_local_and_domain = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !has_local_and_domain {
            return Err(UserValidationError::InvalidEmail);
        }
        if self.code.trim().is_empty() {
            return Err(UserValidationError::EmptyCode);
        }
        if self.first_name.trim().is_empty() {
            return Err(UserValidationError::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(UserValidationError::EmptyLastName);
        }

        Ok(User {
            id,
            email: email.to_owned(),
            code: self.code.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            phone_number: self
                .phone_number
                .map(|phone| phone.trim().to_owned())
                .filter(|phone| !phone.is_empty()),
        })
    }
}

/// Registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: String,
    code: String,
    first_name: String,
    last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
}

impl User {
    /// Rebuild a user from trusted storage without re-validating.
    pub fn from_parts(
        id: UserId,
        email: String,
        code: String,
        first_name: String,
        last_name: String,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            id,
            email,
            code,
            first_name,
            last_name,
            phone_number,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

#[cfg(test)]
mod tests;
