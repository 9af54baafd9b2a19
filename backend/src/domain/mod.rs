//! Domain primitives, rules, and services.
//!
//! Purpose: hold the document lifecycle engine and its collaborators' port
//! definitions. Nothing in this module depends on actix-web or Diesel; inbound
//! and outbound adapters translate to and from these types.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Document, DocumentId, DocumentStatus: the lifecycle aggregate.
//! - User, UserId, UserDraft: document owners.
//! - ValidationError, ValidationErrors: coded rule failures.
//! - DocumentLifecycleService, UserDirectoryService: driving port services.

pub mod document;
pub mod document_service;
pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::document::{Document, DocumentId, DocumentIdError, DocumentStatus, ParseStatusError};
pub use self::document_service::DocumentLifecycleService;
pub use self::error::{Error, ErrorCode};
pub use self::lifecycle::DocumentChanges;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId, UserValidationError};
pub use self::user_service::UserDirectoryService;
pub use self::validation::{ValidationCode, ValidationError, ValidationErrors, all_of, first_of};
