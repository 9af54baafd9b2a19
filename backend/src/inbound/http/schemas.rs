//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or breaks a validation rule.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A referenced resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request collides with stored state.
    #[schema(rename = "conflict")]
    Conflict,
    /// A backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Rule failures are listed under `details.errors` as
/// [`ValidationErrorSchema`] items.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    #[schema(example = "Document with title Spec v1 already exists")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::ValidationError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ValidationError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorSchema {
    /// One of `MISSING_FIELD`, `NOT_FOUND`, `DUPLICATE_TITLE`, `INVALID_STATE`.
    #[schema(example = "DUPLICATE_TITLE")]
    code: String,
    #[schema(example = "Document")]
    resource: String,
    #[schema(example = "title")]
    field: String,
    #[schema(example = "Spec v1")]
    value: Option<String>,
    /// Position of the offending request in a batch.
    index: Option<u32>,
    message: String,
}
