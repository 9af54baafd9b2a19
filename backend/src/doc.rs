//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer
//! (documents, users, health) together with the payload and error schemas.
//! Domain types stay free of utoipa derives; the wrappers in
//! [`crate::inbound::http::schemas`] describe them instead.
//!
//! The generated document backs Swagger UI (debug builds) and is
//! exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::documents::{DocumentPayload, DocumentResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ValidationErrorSchema};
use crate::inbound::http::users::{UserPayload, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Drafts backend API",
        description = "Document lifecycle management with owner, title and status rules.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::documents::list_documents,
        crate::inbound::http::documents::create_document,
        crate::inbound::http::documents::create_documents,
        crate::inbound::http::documents::update_document,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DocumentPayload,
        DocumentResponse,
        UserPayload,
        UserResponse,
        ErrorSchema,
        ErrorCodeSchema,
        ValidationErrorSchema,
    )),
    tags(
        (name = "documents", description = "Create, list and update documents"),
        (name = "users", description = "Document owners"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
