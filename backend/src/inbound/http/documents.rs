//! Document HTTP handlers.
//!
//! ```text
//! GET  /api/v1/documents
//! POST /api/v1/documents
//! POST /api/v1/documents/all
//! PUT  /api/v1/documents/{documentId}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::domain::{Document, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    OWNER_ID, parse_document_id, parse_optional_status, parse_optional_user_id,
};

/// Document body accepted by create and update endpoints.
///
/// Create requires `title`, `text` and `ownerId`; update treats every field
/// as optional.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    #[schema(example = "Spec v1")]
    pub title: Option<String>,
    pub text: Option<String>,
    /// One of `DRAFT`, `REVISION`, `APPROVED`.
    #[schema(example = "DRAFT")]
    pub status: Option<String>,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub owner_id: Option<String>,
}

/// Document returned to clients.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: String,
    pub title: String,
    pub text: String,
    #[schema(example = "DRAFT")]
    pub status: String,
    pub owner_id: String,
}

impl From<Document> for DocumentResponse {
    fn from(value: Document) -> Self {
        Self {
            id: value.id().to_string(),
            title: value.title().to_owned(),
            text: value.text().to_owned(),
            status: value.status().to_string(),
            owner_id: value.owner_id().to_string(),
        }
    }
}

/// Absent title, text or owner are left to the domain rules, which report
/// them as `MISSING_FIELD` details alongside any other failure.
fn parse_create_payload(payload: DocumentPayload) -> Result<CreateDocumentRequest, Error> {
    Ok(CreateDocumentRequest {
        title: payload.title,
        text: payload.text,
        owner_id: parse_optional_user_id(payload.owner_id, OWNER_ID)?,
        status: parse_optional_status(payload.status)?,
    })
}

fn parse_update_payload(payload: DocumentPayload) -> Result<UpdateDocumentRequest, Error> {
    Ok(UpdateDocumentRequest {
        title: payload.title,
        text: payload.text,
        status: parse_optional_status(payload.status)?,
        owner_id: parse_optional_user_id(payload.owner_id, OWNER_ID)?,
    })
}

fn to_responses(documents: Vec<Document>) -> Vec<DocumentResponse> {
    documents.into_iter().map(DocumentResponse::from).collect()
}

/// List every document.
#[utoipa::path(
    get,
    path = "/api/v1/documents",
    responses(
        (status = 200, description = "Documents, oldest first", body = [DocumentResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["documents"],
    operation_id = "listDocuments"
)]
#[get("/documents")]
pub async fn list_documents(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<DocumentResponse>>> {
    let documents = state.documents_query.list_documents().await?;
    Ok(web::Json(to_responses(documents)))
}

/// Create one document.
#[utoipa::path(
    post,
    path = "/api/v1/documents",
    request_body = DocumentPayload,
    responses(
        (status = 201, description = "Document created", body = DocumentResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Owner not found", body = ErrorSchema),
        (status = 409, description = "Title already exists", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["documents"],
    operation_id = "createDocument"
)]
#[post("/documents")]
pub async fn create_document(
    state: web::Data<HttpState>,
    payload: web::Json<DocumentPayload>,
) -> ApiResult<HttpResponse> {
    let request = parse_create_payload(payload.into_inner())?;
    let created = state.documents.create_document(request).await?;
    Ok(HttpResponse::Created().json(DocumentResponse::from(created)))
}

/// Create several documents at once; nothing is stored unless all are valid.
#[utoipa::path(
    post,
    path = "/api/v1/documents/all",
    request_body = [DocumentPayload],
    responses(
        (status = 201, description = "Documents created in request order", body = [DocumentResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Owner not found", body = ErrorSchema),
        (status = 409, description = "Title already exists", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["documents"],
    operation_id = "createDocuments"
)]
#[post("/documents/all")]
pub async fn create_documents(
    state: web::Data<HttpState>,
    payload: web::Json<Vec<DocumentPayload>>,
) -> ApiResult<HttpResponse> {
    let requests = payload
        .into_inner()
        .into_iter()
        .map(parse_create_payload)
        .collect::<Result<Vec<_>, _>>()?;
    let created = state.documents.create_documents(requests).await?;
    Ok(HttpResponse::Created().json(to_responses(created)))
}

/// Update one document.
#[utoipa::path(
    put,
    path = "/api/v1/documents/{documentId}",
    params(("documentId" = String, Path, description = "Document identifier")),
    request_body = DocumentPayload,
    responses(
        (status = 200, description = "Updated document", body = DocumentResponse),
        (status = 400, description = "Invalid request or frozen document", body = ErrorSchema),
        (status = 404, description = "Document not found", body = ErrorSchema),
        (status = 409, description = "Title already exists", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["documents"],
    operation_id = "updateDocument"
)]
#[put("/documents/{document_id}")]
pub async fn update_document(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<DocumentPayload>,
) -> ApiResult<web::Json<DocumentResponse>> {
    let id = parse_document_id(&path.into_inner())?;
    let request = parse_update_payload(payload.into_inner())?;
    let updated = state.documents.update_document(id, request).await?;
    Ok(web::Json(DocumentResponse::from(updated)))
}

#[cfg(test)]
#[path = "documents_tests.rs"]
mod tests;
