//! Draft documents and their lifecycle status.
//!
//! A [`Document`] always has exactly one owner. The owner is fixed when the
//! document is created; nothing in this module can reassign it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Validation errors raised while parsing document identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentIdError {
    Empty,
    Invalid,
}

impl fmt::Display for DocumentIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "document id must not be empty"),
            Self::Invalid => write!(f, "document id must be a valid UUID"),
        }
    }
}

impl std::error::Error for DocumentIdError {}

/// Stable document identifier stored as a UUID.
///
/// # Examples
/// ```
/// use drafts::domain::DocumentId;
///
/// let id = DocumentId::new("1f7a4e0c-3c52-4c55-8d3b-1c1c5a0f1e2d").expect("valid id");
/// assert_eq!(id.to_string(), "1f7a4e0c-3c52-4c55-8d3b-1c1c5a0f1e2d");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new(id: impl AsRef<str>) -> Result<Self, DocumentIdError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(DocumentIdError::Empty);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| DocumentIdError::Invalid)
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DocumentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Position of a document in the approval lifecycle.
///
/// `Draft` and `Revision` are open; `Approved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Revision,
    Approved,
}

impl DocumentStatus {
    /// Wire and storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Revision => "REVISION",
            Self::Approved => "APPROVED",
        }
    }

    /// Whether documents in this status are frozen.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name a [`DocumentStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown document status {}; expected DRAFT, REVISION or APPROVED",
            self.0
        )
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for DocumentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "REVISION" => Ok(Self::Revision),
            "APPROVED" => Ok(Self::Approved),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// A document owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    id: DocumentId,
    title: String,
    text: String,
    status: DocumentStatus,
    owner_id: UserId,
}

impl Document {
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        text: impl Into<String>,
        status: DocumentStatus,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            status,
            owner_id,
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_status(&mut self, status: DocumentStatus) {
        self.status = status;
    }
}
