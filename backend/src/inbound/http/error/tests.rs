//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{Error, ValidationError, ValidationErrors};
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn internal_error_case(expected_trace_id: String) -> Error {
    Error::internal("boom")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"secret": "x"}))
}

#[fixture]
fn duplicate_title_case(expected_trace_id: String) -> Error {
    Error::from(ValidationErrors::from(ValidationError::duplicate_title(
        "Document", "Spec v1",
    )))
    .with_trace_id(expected_trace_id)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id not valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");

    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(
    #[from(internal_error_case)] internal_error: Error,
    expected_trace_id: String,
) {
    let redacted = assert_error_response(
        internal_error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), "Internal server error");
    assert!(redacted.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn validation_details_reach_the_client(
    #[from(duplicate_title_case)] duplicate: Error,
    expected_trace_id: String,
) {
    let payload = assert_error_response(
        duplicate,
        StatusCode::CONFLICT,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(payload.code(), ErrorCode::Conflict);
    assert_eq!(
        payload.details().and_then(|d| d.pointer("/errors/0/code")),
        Some(&json!("DUPLICATE_TITLE"))
    );
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::invalid_request("bad").with_details(json!({"field": "title"}));

    let payload = assert_error_response(error, StatusCode::BAD_REQUEST, None).await;
    assert_eq!(payload.trace_id(), None);
    assert_eq!(payload.details(), Some(&json!({"field": "title"})));
}

#[given("a conflict error code")]
fn a_conflict_error_code() -> ErrorCode {
    ErrorCode::Conflict
}

#[when("the adapter maps the code to an HTTP status")]
fn the_adapter_maps_the_code_to_http_status(code: ErrorCode) -> StatusCode {
    super::status_for(code)
}

#[then("the status is 409 Conflict")]
fn the_status_is_409_conflict(status: StatusCode) {
    assert_eq!(status, StatusCode::CONFLICT);
}

#[given("an internal error carrying details")]
fn an_internal_error_carrying_details() -> Error {
    Error::internal("boom")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": true}))
}

#[when("the adapter redacts the client payload")]
fn the_adapter_redacts_the_client_payload(error: Error) -> Error {
    super::client_body(&error).into_owned()
}

#[then("clients see only the generic message and trace id")]
fn clients_see_only_the_generic_message_and_trace_id(redacted: Error) {
    assert_eq!(redacted.message(), "Internal server error");
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
    assert!(redacted.details().is_none());
}

#[rstest]
fn conflict_maps_to_409() {
    let code = a_conflict_error_code();
    let status = the_adapter_maps_the_code_to_http_status(code);
    the_status_is_409_conflict(status);
}

#[rstest]
fn redaction_keeps_trace_id() {
    let error = an_internal_error_carrying_details();
    let redacted = the_adapter_redacts_the_client_payload(error);
    clients_see_only_the_generic_message_and_trace_id(redacted);
}

#[test]
fn non_internal_errors_pass_through_unchanged() {
    let error = Error::conflict("taken").with_details(json!({"field": "title"}));
    assert!(matches!(
        super::client_body(&error),
        std::borrow::Cow::Borrowed(_)
    ));
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    use actix_web::error;

    let actix_err = error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}
