//! Structured validation failures.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, ErrorCode};

/// Closed set of rule failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    /// A required field is absent.
    MissingField,
    /// A referenced user or document does not exist.
    NotFound,
    /// The title collides with a stored or sibling document.
    DuplicateTitle,
    /// The operation is illegal for the document's current state.
    InvalidState,
}

impl ValidationCode {
    /// Top-level error category for a failure with this code.
    pub const fn error_code(self) -> ErrorCode {
        match self {
            Self::MissingField | Self::InvalidState => ErrorCode::InvalidRequest,
            Self::NotFound => ErrorCode::NotFound,
            Self::DuplicateTitle => ErrorCode::Conflict,
        }
    }
}

/// One rule failure.
///
/// # Examples
/// ```
/// use drafts::domain::{ValidationCode, ValidationError};
///
/// let detail = ValidationError::not_found("User", "id", "U9");
/// assert_eq!(detail.code(), ValidationCode::NotFound);
/// assert_eq!(detail.message(), "User with id U9 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    code: ValidationCode,
    resource: String,
    field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    message: String,
}

impl ValidationError {
    fn new(
        code: ValidationCode,
        resource: &str,
        field: &str,
        value: Option<String>,
        message: String,
    ) -> Self {
        Self {
            code,
            resource: resource.to_owned(),
            field: field.to_owned(),
            value,
            index: None,
            message,
        }
    }

    pub fn missing_field(resource: &str, field: &str) -> Self {
        let message = format!("{resource} field {field} is required");
        Self::new(ValidationCode::MissingField, resource, field, None, message)
    }

    pub fn not_found(resource: &str, field: &str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        let message = format!("{resource} with {field} {value} not found");
        Self::new(ValidationCode::NotFound, resource, field, Some(value), message)
    }

    pub fn duplicate_title(resource: &str, title: &str) -> Self {
        let message = format!("{resource} with title {title} already exists");
        Self::new(
            ValidationCode::DuplicateTitle,
            resource,
            "title",
            Some(title.to_owned()),
            message,
        )
    }

    /// The document is approved and can no longer change.
    pub fn approved(resource: &str) -> Self {
        Self::new(
            ValidationCode::InvalidState,
            resource,
            "status",
            Some("APPROVED".to_owned()),
            "field status is APPROVED".to_owned(),
        )
    }

    pub fn owner_changed(resource: &str, requested: impl fmt::Display) -> Self {
        let value = requested.to_string();
        let message = format!("field owner cannot change to {value}");
        Self::new(
            ValidationCode::InvalidState,
            resource,
            "ownerId",
            Some(value),
            message,
        )
    }

    pub fn approved_at_creation(resource: &str) -> Self {
        Self::new(
            ValidationCode::InvalidState,
            resource,
            "status",
            Some("APPROVED".to_owned()),
            "field status cannot start as APPROVED".to_owned(),
        )
    }

    /// Tag the failure with its position inside a batch.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn code(&self) -> ValidationCode {
        self.code
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Non-empty, ordered list of rule failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap `errors`, returning `None` when there are none.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn first(&self) -> &ValidationError {
        // Constructors guarantee at least one element.
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(value: ValidationError) -> Self {
        Self(vec![value])
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [only] => write!(f, "{only}"),
            many => write!(f, "{} validation errors", many.len()),
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let code = errors.first().code().error_code();
        let message = errors.to_string();
        Self::new(code, message).with_details(json!({ "errors": errors }))
    }
}
