//! Shared validation helpers for inbound HTTP adapters.
//!
//! These cover wire-level problems (absent fields, unparsable ids or
//! statuses). Business rules stay in the domain.

use std::str::FromStr;

use serde_json::json;

use crate::domain::{DocumentId, DocumentStatus, Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidStatus,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidStatus => "invalid_status",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const DOCUMENT_ID: FieldName = FieldName::new("documentId");
pub(crate) const USER_ID: FieldName = FieldName::new("userId");
pub(crate) const OWNER_ID: FieldName = FieldName::new("ownerId");
pub(crate) const STATUS: FieldName = FieldName::new("status");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const CODE: FieldName = FieldName::new("code");
pub(crate) const FIRST_NAME: FieldName = FieldName::new("firstName");
pub(crate) const LAST_NAME: FieldName = FieldName::new("lastName");

fn field_error(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("missing required field: {name}")).with_details(json!({
        "field": name,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::InvalidUuid,
        format!("{name} must be a valid UUID"),
        value,
    )
}

pub(crate) fn parse_document_id(value: &str) -> Result<DocumentId, Error> {
    DocumentId::new(value).map_err(|_| invalid_uuid_error(DOCUMENT_ID, value))
}

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn parse_optional_user_id(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<UserId>, Error> {
    value.map(|raw| parse_user_id(&raw, field)).transpose()
}

pub(crate) fn parse_optional_status(value: Option<String>) -> Result<Option<DocumentStatus>, Error> {
    value
        .map(|raw| {
            DocumentStatus::from_str(&raw).map_err(|err| {
                field_error(STATUS, ErrorCode::InvalidStatus, err.to_string(), &raw)
            })
        })
        .transpose()
}
