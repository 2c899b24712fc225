use super::*;

// =============================================================================
// validation
// =============================================================================

#[test]
fn sign_in_requires_all_fields() {
    assert_eq!(validate_sign_in("", "password1"), Err(ValidationError::MissingFields));
    assert_eq!(validate_sign_in("a@b.co", ""), Err(ValidationError::MissingFields));
    assert_eq!(validate_sign_in("   ", "password1"), Err(ValidationError::MissingFields));
}

#[test]
fn sign_in_rejects_malformed_email() {
    assert_eq!(validate_sign_in("not-an-email", "password1"), Err(ValidationError::InvalidEmail));
    assert_eq!(validate_sign_in("a@b", "password1"), Err(ValidationError::InvalidEmail));
}

#[test]
fn sign_in_rejects_short_password() {
    let err = validate_sign_in("ada@example.com", "abc").expect_err("short password");
    assert_eq!(err, ValidationError::PasswordTooShort);
    assert_eq!(err.to_string(), "Password must be at least 8 characters.");
}

#[test]
fn sign_in_trims_email() {
    let creds = validate_sign_in("  ada@example.com ", "correct horse").unwrap();
    assert_eq!(creds.email, "ada@example.com");
    assert_eq!(creds.password, "correct horse");
}

#[test]
fn sign_up_checks_confirmation_last() {
    assert_eq!(
        validate_sign_up("ada@example.com", "password1", ""),
        Err(ValidationError::MissingFields)
    );
    assert_eq!(
        validate_sign_up("ada@example.com", "short", "short"),
        Err(ValidationError::PasswordTooShort)
    );
    assert_eq!(
        validate_sign_up("ada@example.com", "password1", "password2"),
        Err(ValidationError::PasswordMismatch)
    );
    assert!(validate_sign_up("ada@example.com", "password1", "password1").is_ok());
}

#[test]
fn reset_requires_valid_email() {
    assert_eq!(validate_reset(""), Err(ValidationError::MissingFields));
    assert_eq!(validate_reset("nope"), Err(ValidationError::InvalidEmail));
    assert_eq!(validate_reset(" ada@example.com "), Ok("ada@example.com".to_owned()));
}

#[test]
fn validation_messages_match_form_copy() {
    assert_eq!(ValidationError::MissingFields.to_string(), "All fields are required.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email address.");
    assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords don't match.");
}

// =============================================================================
// provider error mapping
// =============================================================================

#[test]
fn rest_codes_map_to_identity_errors() {
    assert_eq!(IdentityError::from_provider_code("INVALID_LOGIN_CREDENTIALS"), IdentityError::InvalidCredential);
    assert_eq!(IdentityError::from_provider_code("INVALID_PASSWORD"), IdentityError::InvalidCredential);
    assert_eq!(IdentityError::from_provider_code("EMAIL_NOT_FOUND"), IdentityError::UserNotFound);
    assert_eq!(IdentityError::from_provider_code("INVALID_EMAIL"), IdentityError::InvalidEmail);
    assert_eq!(IdentityError::from_provider_code("EMAIL_EXISTS"), IdentityError::EmailInUse);
    assert_eq!(IdentityError::from_provider_code("INVALID_ID_TOKEN"), IdentityError::NoSession);
    assert_eq!(IdentityError::from_provider_code("INVALID_REFRESH_TOKEN"), IdentityError::NoSession);
}

#[test]
fn rest_codes_with_detail_suffix_map() {
    assert_eq!(
        IdentityError::from_provider_code("WEAK_PASSWORD : Password should be at least 6 characters"),
        IdentityError::WeakPassword
    );
    assert_eq!(
        IdentityError::from_provider_code("TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"),
        IdentityError::TooManyRequests
    );
}

#[test]
fn sdk_codes_map_to_identity_errors() {
    assert_eq!(IdentityError::from_provider_code("auth/user-not-found"), IdentityError::UserNotFound);
    assert_eq!(IdentityError::from_provider_code("auth/email-already-in-use"), IdentityError::EmailInUse);
    assert_eq!(IdentityError::from_provider_code("auth/weak-password"), IdentityError::WeakPassword);
}

#[test]
fn unknown_codes_fall_back_to_unavailable() {
    assert_eq!(IdentityError::from_provider_code("SOMETHING_NEW"), IdentityError::Unavailable);
    assert_eq!(IdentityError::from_provider_code(""), IdentityError::Unavailable);
}

#[test]
fn codes_match_serde_names() {
    for err in [
        IdentityError::InvalidCredential,
        IdentityError::UserNotFound,
        IdentityError::InvalidEmail,
        IdentityError::WeakPassword,
        IdentityError::EmailInUse,
        IdentityError::NoSession,
        IdentityError::TooManyRequests,
        IdentityError::Unavailable,
    ] {
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, format!("\"{}\"", err.code()));
    }
}

#[test]
fn error_body_from_identity_error() {
    let body = ErrorBody::from(IdentityError::EmailInUse);
    assert_eq!(body.error, "email_in_use");
    assert_eq!(body.message, "An account with this email already exists.");
}
