//! Identity provider client.
//!
//! ARCHITECTURE
//! ============
//! Passwords never touch the database. Sign-in, sign-up, password reset and
//! token lookup are delegated to an Identity Toolkit compatible REST API
//! (Firebase Auth or its emulator). ID tokens are short lived; the refresh
//! token returned at sign-in is exchanged at the secure-token endpoint for a
//! new one. Routes depend on the [`IdentityProvider`] trait so tests can
//! swap in a mock.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections arrive as `{"error": {"message": "CODE : detail"}}`
//! and are folded into [`IdentityError`] by [`parse_error_body`]. Transport
//! and decoding failures surface as [`IdentityProviderError::Transport`] /
//! [`IdentityProviderError::UnexpectedResponse`] and render as the generic
//! "try again later" message.

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

use std::time::Duration;

use profile::IdentityError;
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT_SECS: u64 = 15;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Lifetime assumed when the provider omits `expiresIn`.
pub const DEFAULT_ID_TOKEN_TTL_SECS: i64 = 3600;

// =============================================================================
// TYPES
// =============================================================================

/// Tokens returned by a successful sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSession {
    /// Provider-side user id.
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// ID token lifetime in seconds, sent as a decimal string.
    #[serde(default)]
    pub expires_in: Option<String>,
}

impl ProviderSession {
    /// The tokens worth keeping with a local session.
    #[must_use]
    pub fn grant(&self) -> TokenGrant {
        TokenGrant {
            id_token: self.id_token.clone(),
            refresh_token: self.refresh_token.clone(),
            expires_in_secs: parse_expires_in(self.expires_in.as_deref()),
        }
    }
}

/// An ID token with the refresh token that renews it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub id_token: String,
    /// Empty when the provider did not rotate it.
    pub refresh_token: String,
    pub expires_in_secs: i64,
}

/// Account resolved from an ID token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAccount {
    pub local_id: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityProviderError {
    #[error("identity provider rejected request: {0:?}")]
    Rejected(IdentityError),
    #[error("identity provider request failed: {0}")]
    Transport(String),
    #[error("unexpected identity provider response: {0}")]
    UnexpectedResponse(String),
}

impl IdentityProviderError {
    /// User-facing classification of this failure.
    #[must_use]
    pub fn identity_error(&self) -> IdentityError {
        match self {
            Self::Rejected(err) => *err,
            Self::Transport(_) | Self::UnexpectedResponse(_) => IdentityError::Unavailable,
        }
    }
}

/// Provider-neutral identity operations. Enables mocking in tests.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Rejected`] with `InvalidCredential`,
    /// `UserNotFound` or `InvalidEmail` for bad credentials.
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityProviderError>;

    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Rejected`] with `WeakPassword`,
    /// `EmailInUse` or `InvalidEmail`.
    async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityProviderError>;

    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Rejected`] with `UserNotFound`.
    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityProviderError>;

    /// Resolve an ID token to the account it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Rejected`] with `NoSession` for an
    /// expired or unknown token.
    async fn lookup(&self, id_token: &str) -> Result<ProviderAccount, IdentityProviderError>;

    /// Exchange a refresh token for a fresh ID token.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Rejected`] with `NoSession` when the
    /// refresh token is expired or revoked.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenGrant, IdentityProviderError>;
}

// =============================================================================
// REST CLIENT
// =============================================================================

/// Identity Toolkit v1 REST client (`accounts:*` endpoints).
pub struct IdentityToolkitClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'static str,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<ProviderAccount>,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
}

/// Secure-token responses use snake_case, unlike the `accounts:*` endpoints.
#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<String>,
}

impl IdentityToolkitClient {
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Transport`] if the HTTP client fails to build.
    pub fn new(base_url: &str, token_url: &str, api_key: &str) -> Result<Self, IdentityProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| IdentityProviderError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token_url: token_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{method}", self.base_url)
    }

    fn token_endpoint(&self) -> String {
        format!("{}/token", self.token_url)
    }

    async fn call<B: Serialize + Sync>(&self, method: &str, body: &B) -> Result<String, IdentityProviderError> {
        self.send(method, self.http.post(self.endpoint(method)).json(body)).await
    }

    async fn send(&self, method: &str, request: reqwest::RequestBuilder) -> Result<String, IdentityProviderError> {
        let response = request
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| IdentityProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| IdentityProviderError::Transport(e.to_string()))?;

        if status.is_success() {
            return Ok(text);
        }

        let err = parse_error_body(&text);
        tracing::debug!(method, status = status.as_u16(), code = err.code(), "identity provider rejected request");
        Err(IdentityProviderError::Rejected(err))
    }
}

#[async_trait::async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityProviderError> {
        let body = PasswordRequest { email, password, return_secure_token: true };
        let text = self.call("signInWithPassword", &body).await?;
        parse_json(&text)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityProviderError> {
        let body = PasswordRequest { email, password, return_secure_token: true };
        let text = self.call("signUp", &body).await?;
        parse_json(&text)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityProviderError> {
        let body = OobCodeRequest { request_type: "PASSWORD_RESET", email };
        self.call("sendOobCode", &body).await?;
        Ok(())
    }

    async fn lookup(&self, id_token: &str) -> Result<ProviderAccount, IdentityProviderError> {
        let text = self.call("lookup", &LookupRequest { id_token }).await?;
        parse_lookup(&text)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenGrant, IdentityProviderError> {
        let body = RefreshRequest { grant_type: "refresh_token", refresh_token };
        let text = self.send("token", self.http.post(self.token_endpoint()).form(&body)).await?;
        parse_refresh(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the provider error code from an error response body.
#[must_use]
pub fn parse_error_body(text: &str) -> IdentityError {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(|m| m.as_str()).map(str::to_owned))
        .map_or(IdentityError::Unavailable, |code| IdentityError::from_provider_code(&code))
}

fn parse_json<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T, IdentityProviderError> {
    serde_json::from_str(text).map_err(|e| IdentityProviderError::UnexpectedResponse(e.to_string()))
}

fn parse_lookup(text: &str) -> Result<ProviderAccount, IdentityProviderError> {
    let response: LookupResponse = parse_json(text)?;
    response
        .users
        .into_iter()
        .next()
        .ok_or(IdentityProviderError::Rejected(IdentityError::NoSession))
}

fn parse_refresh(text: &str) -> Result<TokenGrant, IdentityProviderError> {
    let response: RefreshResponse = parse_json(text)?;
    Ok(TokenGrant {
        id_token: response.id_token,
        refresh_token: response.refresh_token,
        expires_in_secs: parse_expires_in(response.expires_in.as_deref()),
    })
}

/// `expiresIn` as seconds; missing or unparseable values fall back to an hour.
fn parse_expires_in(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_ID_TOKEN_TTL_SECS)
}
