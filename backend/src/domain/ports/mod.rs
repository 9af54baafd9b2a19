//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`DocumentCommand`, `DocumentQuery`, `UserDirectory`) are implemented
//! by domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod document_command;
mod document_query;
mod document_repository;
mod user_directory;
mod user_repository;

#[cfg(test)]
pub use document_command::MockDocumentCommand;
pub use document_command::{CreateDocumentRequest, DocumentCommand, UpdateDocumentRequest};
#[cfg(test)]
pub use document_query::MockDocumentQuery;
pub use document_query::DocumentQuery;
#[cfg(test)]
pub use document_repository::MockDocumentRepository;
pub use document_repository::{DocumentRepository, DocumentRepositoryError};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
