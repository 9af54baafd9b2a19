//! Tests for user directory handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{UserId, ValidationError, ValidationErrors};
use crate::inbound::http::test_utils::MockPorts;

fn john(id: UserId) -> User {
    User::from_parts(
        id,
        "johndoe@email.com".to_owned(),
        "A00369982".to_owned(),
        "John".to_owned(),
        "Doe".to_owned(),
        None,
    )
}

async fn send(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(ports.app()).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&body).expect("JSON body"))
}

#[rstest]
#[actix_web::test]
async fn list_users_returns_profiles() {
    let mut ports = MockPorts::default();
    ports
        .users
        .expect_list_users()
        .returning(|| Ok(vec![john(UserId::random())]));

    let (status, body) = send(ports, actix_test::TestRequest::get().uri("/api/v1/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["firstName"], "John");
    assert!(body[0].get("phoneNumber").is_none());
}

#[rstest]
#[actix_web::test]
async fn create_user_returns_201() {
    let mut ports = MockPorts::default();
    ports
        .users
        .expect_create_user()
        .withf(|draft| draft.email == "johndoe@email.com" && draft.phone_number.is_none())
        .returning(|_| Ok(john(UserId::random())));

    let request = actix_test::TestRequest::post().uri("/api/v1/users").set_json(json!({
        "email": "johndoe@email.com",
        "code": "A00369982",
        "firstName": "John",
        "lastName": "Doe"
    }));
    let (status, body) = send(ports, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], "A00369982");
}

#[rstest]
#[case(json!({"code": "A1", "firstName": "J", "lastName": "D"}), "email")]
#[case(json!({"email": "j@d.co", "firstName": "J", "lastName": "D"}), "code")]
#[case(json!({"email": "j@d.co", "code": "A1", "lastName": "D"}), "firstName")]
#[case(json!({"email": "j@d.co", "code": "A1", "firstName": "J"}), "lastName")]
#[actix_web::test]
async fn create_user_reports_missing_fields(#[case] payload: Value, #[case] field: &str) {
    let mut ports = MockPorts::default();
    ports.users.expect_create_user().never();

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(payload);
    let (status, body) = send(ports, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], "missing_field");
}

#[rstest]
#[actix_web::test]
async fn get_user_returns_404_for_unknown_id() {
    let id = UserId::random();
    let mut ports = MockPorts::default();
    ports.users.expect_get_user().returning(|id| {
        Err(ValidationErrors::from(ValidationError::not_found("User", "id", id)).into())
    });

    let request = actix_test::TestRequest::get().uri(&format!("/api/v1/users/{id}"));
    let (status, body) = send(ports, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("User with id {id} not found"));
}

#[rstest]
#[actix_web::test]
async fn get_user_rejects_malformed_id() {
    let mut ports = MockPorts::default();
    ports.users.expect_get_user().never();

    let request = actix_test::TestRequest::get().uri("/api/v1/users/U9");
    let (status, body) = send(ports, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "userId");
    assert_eq!(body["details"]["value"], "U9");
}
