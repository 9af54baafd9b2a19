//! Tests for error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn conflict_with_details() -> Error {
    Error::conflict("Document with title Spec v1 already exists")
        .with_details(json!({ "errors": [{ "code": "DUPLICATE_TITLE" }] }))
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("fixture is a valid UUID");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;

    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields(conflict_with_details: Error) {
    let value = serde_json::to_value(&conflict_with_details).expect("serialise");

    assert_eq!(value.get("code"), Some(&json!("conflict")));
    assert!(value.get("traceId").is_none());
    assert_eq!(
        value.pointer("/details/errors/0/code"),
        Some(&json!("DUPLICATE_TITLE"))
    );
}

#[rstest]
fn round_trips_through_json(conflict_with_details: Error) {
    let payload = conflict_with_details.clone().with_trace_id(TRACE_ID);
    let bytes = serde_json::to_vec(&payload).expect("serialise");
    let decoded: Error = serde_json::from_slice(&bytes).expect("deserialise");

    assert_eq!(decoded, payload);
}
