use super::*;

// =============================================================================
// parse_error_body
// =============================================================================

#[test]
fn parse_error_body_maps_rest_code() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND","errors":[]}}"#;
    assert_eq!(parse_error_body(body), IdentityError::UserNotFound);
}

#[test]
fn parse_error_body_strips_detail_suffix() {
    let body = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
    assert_eq!(parse_error_body(body), IdentityError::WeakPassword);
}

#[test]
fn parse_error_body_non_json_is_unavailable() {
    assert_eq!(parse_error_body("<html>502</html>"), IdentityError::Unavailable);
}

#[test]
fn parse_error_body_missing_message_is_unavailable() {
    assert_eq!(parse_error_body(r#"{"error":{"code":500}}"#), IdentityError::Unavailable);
}

// =============================================================================
// success payloads
// =============================================================================

#[test]
fn provider_session_parses_sign_in_response() {
    let body = r#"{
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": "uid-1",
        "email": "ada@example.com",
        "idToken": "id.token.value",
        "refreshToken": "refresh",
        "expiresIn": "3600",
        "registered": true
    }"#;
    let session: ProviderSession = parse_json(body).unwrap();
    assert_eq!(session.local_id, "uid-1");
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(session.id_token, "id.token.value");
    assert_eq!(
        session.grant(),
        TokenGrant { id_token: "id.token.value".into(), refresh_token: "refresh".into(), expires_in_secs: 3600 }
    );
}

#[test]
fn parse_refresh_reads_snake_case_token_response() {
    let body = r#"{
        "access_token": "access",
        "expires_in": "1800",
        "token_type": "Bearer",
        "refresh_token": "refresh-2",
        "id_token": "id.token.new",
        "user_id": "uid-1",
        "project_id": "123"
    }"#;
    let grant = parse_refresh(body).unwrap();
    assert_eq!(grant.id_token, "id.token.new");
    assert_eq!(grant.refresh_token, "refresh-2");
    assert_eq!(grant.expires_in_secs, 1800);
}

#[test]
fn parse_refresh_without_id_token_is_unexpected() {
    let err = parse_refresh(r#"{"refresh_token":"r"}"#).unwrap_err();
    assert!(matches!(err, IdentityProviderError::UnexpectedResponse(_)));
}

#[test]
fn expires_in_falls_back_to_an_hour() {
    assert_eq!(parse_expires_in(None), DEFAULT_ID_TOKEN_TTL_SECS);
    assert_eq!(parse_expires_in(Some("soon")), DEFAULT_ID_TOKEN_TTL_SECS);
    assert_eq!(parse_expires_in(Some("-5")), DEFAULT_ID_TOKEN_TTL_SECS);
    assert_eq!(parse_expires_in(Some(" 120 ")), 120);
}

#[test]
fn revoked_refresh_token_is_no_session() {
    let body = r#"{"error":{"code":400,"message":"INVALID_REFRESH_TOKEN","status":"INVALID_ARGUMENT"}}"#;
    assert_eq!(parse_error_body(body), IdentityError::NoSession);
}

#[test]
fn provider_session_missing_token_is_unexpected() {
    let err = parse_json::<ProviderSession>(r#"{"localId":"uid-1"}"#).unwrap_err();
    assert!(matches!(err, IdentityProviderError::UnexpectedResponse(_)));
    assert_eq!(err.identity_error(), IdentityError::Unavailable);
}

#[test]
fn parse_lookup_returns_first_user() {
    let body = r#"{"users":[{"localId":"uid-9","email":"grace@example.com","emailVerified":false}]}"#;
    let account = parse_lookup(body).unwrap();
    assert_eq!(account.local_id, "uid-9");
    assert_eq!(account.email, "grace@example.com");
}

#[test]
fn parse_lookup_without_users_is_no_session() {
    let err = parse_lookup(r#"{"kind":"identitytoolkit#GetAccountInfoResponse"}"#).unwrap_err();
    assert_eq!(err.identity_error(), IdentityError::NoSession);
}

// =============================================================================
// client construction
// =============================================================================

#[test]
fn endpoint_joins_base_url_and_method() {
    let client = IdentityToolkitClient::new(
        "http://localhost:9099/identitytoolkit.googleapis.com/v1/",
        "http://localhost:9099/securetoken.googleapis.com/v1/",
        "k",
    )
    .unwrap();
    assert_eq!(
        client.endpoint("signInWithPassword"),
        "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:signInWithPassword"
    );
    assert_eq!(client.token_endpoint(), "http://localhost:9099/securetoken.googleapis.com/v1/token");
}

#[test]
fn rejected_error_keeps_classification() {
    let err = IdentityProviderError::Rejected(IdentityError::EmailInUse);
    assert_eq!(err.identity_error(), IdentityError::EmailInUse);
}
