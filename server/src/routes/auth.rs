//! Auth routes: provider-backed sign-in, sign-up and password reset, plus cookie sessions.
//!
//! Every form handler validates the request body with the same rules the
//! browser applies, so an invalid submission is rejected with `400` before
//! any identity-provider call is made.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use profile::IdentityError;
use profile::identity::{validate_reset, validate_sign_in, validate_sign_up};
use serde::Deserialize;
use time::Duration;
use uuid::Uuid;

use super::api_error;
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

fn session_cookie(token: String, secure: bool, ttl_hours: i64) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::hours(ttl_hours.max(1)))
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Status code for a provider-side failure.
pub(crate) fn identity_status(err: IdentityError) -> StatusCode {
    match err {
        IdentityError::InvalidCredential | IdentityError::NoSession => StatusCode::UNAUTHORIZED,
        IdentityError::UserNotFound => StatusCode::NOT_FOUND,
        IdentityError::InvalidEmail | IdentityError::WeakPassword => StatusCode::BAD_REQUEST,
        IdentityError::EmailInUse => StatusCode::CONFLICT,
        IdentityError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        IdentityError::Unavailable => StatusCode::BAD_GATEWAY,
    }
}

fn unavailable() -> Response {
    api_error(StatusCode::INTERNAL_SERVER_ERROR, IdentityError::Unavailable)
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(api_error(StatusCode::UNAUTHORIZED, IdentityError::NoSession));
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                unavailable()
            })?
            .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, IdentityError::NoSession))?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Caller of the link API: a session cookie or an `Authorization: Bearer <idToken>` header.
pub struct ApiUser {
    pub user_id: Uuid,
}

/// Bearer token from an `Authorization` header value.
pub(crate) fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl<S> FromRequestParts<S> for ApiUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_owned);

        let Some(id_token) = bearer else {
            let auth = AuthUser::from_request_parts(parts, state).await?;
            return Ok(Self { user_id: auth.user.id });
        };

        let app_state = AppState::from_ref(state);
        let account = app_state.identity.lookup(&id_token).await.map_err(|e| {
            let err = e.identity_error();
            tracing::debug!(error = %e, "bearer token rejected");
            api_error(identity_status(err), err)
        })?;

        let user = session::user_by_provider_uid(&app_state.pool, &account.local_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "user lookup failed");
                unavailable()
            })?
            .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, IdentityError::NoSession))?;

        Ok(Self { user_id: user.id })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    confirm_password: String,
}

#[derive(Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    email: String,
}

/// `POST /api/auth/login`: sign in with the provider, then upsert the user and set the session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginRequest>) -> Response {
    let creds = match validate_sign_in(&body.email, &body.password) {
        Ok(c) => c,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, e),
    };

    let signed_in = match state.identity.sign_in(&creds.email, &creds.password).await {
        Ok(s) => s,
        Err(e) => {
            let err = e.identity_error();
            tracing::info!(error = %e, "sign-in rejected");
            // Unknown accounts answer like a wrong password.
            let status = if err == IdentityError::UserNotFound { StatusCode::UNAUTHORIZED } else { identity_status(err) };
            return api_error(status, err);
        }
    };

    let email = if signed_in.email.is_empty() { creds.email } else { signed_in.email.clone() };
    let user_id = match session::upsert_user(&state.pool, &signed_in.local_id, &email).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "user upsert failed");
            return unavailable();
        }
    };

    let ttl = state.config.session_ttl_hours;
    let token = match session::create_session(&state.pool, user_id, &signed_in.grant(), ttl).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return unavailable();
        }
    };

    tracing::info!(%user_id, "signed in");
    let jar = jar.add(session_cookie(token, state.cookie_secure(), ttl));
    (jar, StatusCode::NO_CONTENT).into_response()
}

/// `POST /api/auth/signup`: create the provider account. The user signs in afterwards.
pub async fn signup(State(state): State<AppState>, Json(body): Json<SignupRequest>) -> Response {
    let creds = match validate_sign_up(&body.email, &body.password, &body.confirm_password) {
        Ok(c) => c,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, e),
    };

    match state.identity.sign_up(&creds.email, &creds.password).await {
        Ok(account) => {
            tracing::info!(provider_uid = %account.local_id, "account created");
            (StatusCode::CREATED, Json(serde_json::json!({ "message": "Account created. Please sign in." })))
                .into_response()
        }
        Err(e) => {
            let err = e.identity_error();
            tracing::info!(error = %e, "sign-up rejected");
            api_error(identity_status(err), err)
        }
    }
}

/// `POST /api/auth/reset`: ask the provider to email a password-reset link.
pub async fn reset(State(state): State<AppState>, Json(body): Json<ResetRequest>) -> Response {
    let email = match validate_reset(&body.email) {
        Ok(e) => e,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, e),
    };

    match state.identity.send_password_reset(&email).await {
        Ok(()) => Json(serde_json::json!({ "message": "Password reset email sent. Check your inbox." })).into_response(),
        Err(e) => {
            let err = e.identity_error();
            tracing::info!(error = %e, "password reset rejected");
            api_error(identity_status(err), err)
        }
    }
}

/// `GET /api/auth/id-token`: provider ID token for the current session,
/// renewed first when it is about to expire.
pub async fn id_token(State(state): State<AppState>, auth: AuthUser) -> Response {
    let stored = match session::session_id_token(&state.pool, &auth.token).await {
        Ok(Some(stored)) => stored,
        Ok(None) => return api_error(StatusCode::UNAUTHORIZED, IdentityError::NoSession),
        Err(e) => {
            tracing::error!(error = %e, "id token lookup failed");
            return unavailable();
        }
    };

    match session::refresh_if_stale(state.identity.as_ref(), &stored).await {
        Ok(None) => id_token_body(&stored.id_token),
        Ok(Some(grant)) => {
            if let Err(e) = session::update_session_tokens(&state.pool, &auth.token, &grant).await {
                tracing::warn!(error = %e, "refreshed id token not stored");
            }
            id_token_body(&grant.id_token)
        }
        Err(e) => {
            let err = e.identity_error();
            tracing::info!(user_id = %auth.user.id, error = %e, "id token refresh failed");
            api_error(identity_status(err), err)
        }
    }
}

fn id_token_body(token: &str) -> Response {
    Json(serde_json::json!({ "idToken": token })).into_response()
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete the session if any, always clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value).filter(|t| !t.is_empty()) {
        if let Err(e) = session::delete_session(&state.pool, token).await {
            tracing::warn!(error = %e, "session delete failed");
        }
    }

    let jar = jar.add(cleared_cookie(state.cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
