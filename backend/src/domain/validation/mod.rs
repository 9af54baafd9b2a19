//! Validation rules for document operations.
//!
//! Each rule is a pure function returning `Option<ValidationError>`: `None`
//! when the rule holds. Rules never touch storage themselves; the service
//! performs the lookups and hands the results in. Operations combine rule
//! outcomes with [`first_of`] (fail fast) or [`all_of`] (report everything).

mod aggregate;
mod error;
pub mod rules;

pub use aggregate::{all_of, first_of};
pub use error::{ValidationCode, ValidationError, ValidationErrors};

/// Resource name used in details about documents.
pub const DOCUMENT: &str = "Document";
/// Resource name used in details about users.
pub const USER: &str = "User";

/// Field names checked by the creation presence rules.
pub const TITLE: &str = "title";
pub const TEXT: &str = "text";
