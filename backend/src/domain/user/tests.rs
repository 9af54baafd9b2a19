//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

const VALID_ID: &str = "a77e71c1-99d9-4804-be9b-e26cf4380981";

#[fixture]
fn draft() -> UserDraft {
    UserDraft {
        email: "johndoe@email.com".to_owned(),
        code: "A00369982".to_owned(),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        phone_number: Some("+57 00000000".to_owned()),
    }
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("U9", UserValidationError::InvalidId)]
#[case(" a77e71c1-99d9-4804-be9b-e26cf4380981", UserValidationError::InvalidId)]
fn user_id_rejects_malformed_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_serialises_as_plain_string() {
    let id = UserId::new(VALID_ID).expect("valid id");
    let value = serde_json::to_value(id).expect("serialise");
    assert_eq!(value, serde_json::Value::String(VALID_ID.to_owned()));
}

#[rstest]
fn draft_trims_fields_and_drops_blank_phone(mut draft: UserDraft) {
    draft.first_name = "  John ".to_owned();
    draft.phone_number = Some("   ".to_owned());

    let user = draft.into_user(UserId::random()).expect("valid draft");

    assert_eq!(user.first_name(), "John");
    assert!(user.phone_number().is_none());
}

#[rstest]
#[case::missing_at("johndoe.email.com", UserValidationError::InvalidEmail)]
#[case::empty_local("@email.com", UserValidationError::InvalidEmail)]
#[case::empty_domain("johndoe@", UserValidationError::InvalidEmail)]
fn draft_rejects_invalid_email(
    mut draft: UserDraft,
    #[case] email: &str,
    #[case] expected: UserValidationError,
) {
    draft.email = email.to_owned();
    assert_eq!(draft.into_user(UserId::random()), Err(expected));
}

#[rstest]
fn draft_rejects_blank_names(mut draft: UserDraft) {
    draft.last_name = " ".to_owned();
    let err = draft.into_user(UserId::random()).expect_err("blank last name");

    assert_eq!(err, UserValidationError::EmptyLastName);
    assert_eq!(err.field(), "lastName");
}

#[rstest]
fn user_serialises_camel_case(draft: UserDraft) {
    let id = UserId::new(VALID_ID).expect("valid id");
    let user = draft.into_user(id).expect("valid draft");
    let value = serde_json::to_value(&user).expect("serialise");

    assert_eq!(value["id"], VALID_ID);
    assert_eq!(value["firstName"], "John");
    assert_eq!(value["phoneNumber"], "+57 00000000");
}
