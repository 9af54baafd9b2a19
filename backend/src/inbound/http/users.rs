//! User directory HTTP handlers.
//!
//! ```text
//! GET  /api/v1/users
//! POST /api/v1/users {"email":"johndoe@email.com","code":"A00369982","firstName":"John","lastName":"Doe"}
//! GET  /api/v1/users/{userId}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    CODE, EMAIL, FIRST_NAME, LAST_NAME, USER_ID, missing_field_error, parse_user_id,
};

/// Registration body for `POST /api/v1/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[schema(example = "johndoe@email.com")]
    pub email: Option<String>,
    #[schema(example = "A00369982")]
    pub code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl TryFrom<UserPayload> for UserDraft {
    type Error = Error;

    fn try_from(value: UserPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            email: value.email.ok_or_else(|| missing_field_error(EMAIL))?,
            code: value.code.ok_or_else(|| missing_field_error(CODE))?,
            first_name: value
                .first_name
                .ok_or_else(|| missing_field_error(FIRST_NAME))?,
            last_name: value
                .last_name
                .ok_or_else(|| missing_field_error(LAST_NAME))?,
            phone_number: value.phone_number,
        })
    }
}

/// User returned to clients.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub email: String,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id().to_string(),
            email: value.email().to_owned(),
            code: value.code().to_owned(),
            first_name: value.first_name().to_owned(),
            last_name: value.last_name().to_owned(),
            phone_number: value.phone_number().map(str::to_owned),
        }
    }
}

/// List registered users.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let draft = UserDraft::try_from(payload.into_inner())?;
    let user = state.users.create_user(draft).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}",
    params(("userId" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path.into_inner(), USER_ID)?;
    let user = state.users.get_user(id).await?;
    Ok(web::Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests;
