//! Credential checks and the identity error table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms run these validators before any network call, so a rejected form
//! never reaches the identity provider. Provider failures come back as
//! short error codes which [`IdentityError::from_provider_code`] folds into
//! the fixed set of user-facing messages shown inline.

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Form validation failure, rendered verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Passwords don't match.")]
    PasswordMismatch,
}

/// Validated email + password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// # Errors
///
/// Returns the first failing [`ValidationError`] check.
pub fn validate_sign_in(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Returns the first failing [`ValidationError`] check.
pub fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<Credentials, ValidationError> {
    if confirm.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    let credentials = validate_sign_in(email, password)?;
    if credentials.password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(credentials)
}

/// # Errors
///
/// Returns [`ValidationError::MissingFields`] or [`ValidationError::InvalidEmail`].
pub fn validate_reset(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.to_owned())
}

/// Identity failure after validation passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum IdentityError {
    #[error("Invalid email or password.")]
    InvalidCredential,
    #[error("No account found with this email.")]
    UserNotFound,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Password is too weak. Choose a longer password.")]
    WeakPassword,
    #[error("An account with this email already exists.")]
    EmailInUse,
    #[error("No authenticated user found. Please sign in.")]
    NoSession,
    #[error("Too many attempts. Please try again later.")]
    TooManyRequests,
    #[error("Something went wrong. Please try again later.")]
    Unavailable,
}

impl IdentityError {
    /// Map a provider error code (REST or SDK style) to an [`IdentityError`].
    #[must_use]
    pub fn from_provider_code(code: &str) -> Self {
        // REST codes may carry detail after a colon, e.g. "WEAK_PASSWORD : Password should be ...".
        let head = code.split(':').next().unwrap_or_default().trim();
        match head {
            "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "USER_DISABLED" | "auth/invalid-credential"
            | "auth/wrong-password" | "auth/user-disabled" => Self::InvalidCredential,
            "EMAIL_NOT_FOUND" | "auth/user-not-found" => Self::UserNotFound,
            "INVALID_EMAIL" | "MISSING_EMAIL" | "auth/invalid-email" => Self::InvalidEmail,
            "WEAK_PASSWORD" | "auth/weak-password" => Self::WeakPassword,
            "EMAIL_EXISTS" | "auth/email-already-in-use" => Self::EmailInUse,
            "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" | "INVALID_REFRESH_TOKEN" | "MISSING_REFRESH_TOKEN"
            | "auth/user-token-expired" => Self::NoSession,
            "TOO_MANY_ATTEMPTS_TRY_LATER" | "auth/too-many-requests" => Self::TooManyRequests,
            _ => Self::Unavailable,
        }
    }

    /// Machine-readable code used in API error bodies.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidCredential => "invalid_credential",
            Self::UserNotFound => "user_not_found",
            Self::InvalidEmail => "invalid_email",
            Self::WeakPassword => "weak_password",
            Self::EmailInUse => "email_in_use",
            Self::NoSession => "no_session",
            Self::TooManyRequests => "too_many_requests",
            Self::Unavailable => "unavailable",
        }
    }
}

/// JSON error body returned by the auth and profile endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl From<IdentityError> for ErrorBody {
    fn from(err: IdentityError) -> Self {
        Self { error: err.code().to_owned(), message: err.to_string() }
    }
}

impl From<ValidationError> for ErrorBody {
    fn from(err: ValidationError) -> Self {
        Self { error: "validation".to_owned(), message: err.to_string() }
    }
}
