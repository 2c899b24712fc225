use super::*;

#[test]
fn user_deserializes_from_me_response() {
    let user: User =
        serde_json::from_str(r#"{"id":"4b1d2c3e-0000-4000-8000-000000000001","email":"ada@example.com"}"#).unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.id, "4b1d2c3e-0000-4000-8000-000000000001");
}

#[test]
fn id_token_uses_camel_case_key() {
    let body: IdTokenResponse = serde_json::from_str(r#"{"idToken":"eyJhbGciOi"}"#).unwrap();
    assert_eq!(body.id_token, "eyJhbGciOi");
    assert!(serde_json::from_str::<IdTokenResponse>(r#"{"id_token":"x"}"#).is_err());
}

#[test]
fn message_response_ignores_extra_fields() {
    let body: MessageResponse = serde_json::from_str(r#"{"message":"Account created.","extra":1}"#).unwrap();
    assert_eq!(body.message, "Account created.");
}
