//! Session guard for protected pages.
//!
//! Runs as middleware in front of the SSR page router. A request for a
//! protected page without a valid session cookie ends in `303 See Other` to
//! the login page; there is no retry and no error page. A failing session
//! lookup counts as signed out.

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::auth::COOKIE_NAME;
use crate::services::session;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/auth/login";

/// Pages that require a signed-in user.
pub const PROTECTED_PATHS: [&str; 5] =
    ["/", "/profile/customize-links", "/profile/preview", "/profile/share", "/profile/qrcode"];

#[must_use]
pub fn is_protected(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    PROTECTED_PATHS.contains(&normalized)
}

/// Middleware: redirect to [`LOGIN_PATH`] unless the session cookie is valid.
pub async fn require_session(State(state): State<AppState>, jar: CookieJar, req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if !is_protected(path) {
        return next.run(req).await;
    }

    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        tracing::debug!(path, "no session cookie, redirecting to login");
        return Redirect::to(LOGIN_PATH).into_response();
    }

    match session::validate_session(&state.pool, token).await {
        Ok(Some(_)) => next.run(req).await,
        Ok(None) => Redirect::to(LOGIN_PATH).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "session check failed, treating as signed out");
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}

/// Wrap a page router with [`require_session`].
pub fn guarded(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, require_session))
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
