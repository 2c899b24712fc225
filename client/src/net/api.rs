//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as the user-facing message from the server's
//! `{error, message}` body when there is one, so pages can put them straight
//! into a toast or an inline error without another mapping step.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use profile::{ProfileData, RemoteLink};

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::{IdTokenResponse, MessageResponse};

#[cfg(not(feature = "hydrate"))]
const SERVER_ONLY: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn public_profile_endpoint(id: &str) -> String {
    format!("/api/public/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// User-facing message for a failed response: the server's `message` when
/// the body is an error document, otherwise a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<profile::identity::ErrorBody>(body) {
        Ok(err) if !err.message.is_empty() => err.message,
        _ => format!("request failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(status, &body)
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`. The server sets the session cookie.
///
/// # Errors
///
/// Returns the server's message (bad credentials, validation) or a transport error.
pub async fn login(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`. Returns the confirmation message.
///
/// # Errors
///
/// Returns the server's message (email in use, weak password) or a transport error.
pub async fn signup(email: &str, password: &str, confirm_password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "confirmPassword": confirm_password,
        });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, confirm_password);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Request a password-reset email via `POST /api/auth/reset`.
///
/// # Errors
///
/// Returns the server's message or a transport error.
pub async fn reset_password(email: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/reset")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch the provider id token for the current session.
///
/// # Errors
///
/// Returns an error string when there is no session or the request fails.
pub async fn fetch_id_token() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/id-token")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        let body: IdTokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.id_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// Fetch the signed-in user's saved profile from `GET /api/profile`.
///
/// # Errors
///
/// Returns an error string on a non-OK status or transport failure.
pub async fn fetch_profile() -> Result<ProfileData, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/profile")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<ProfileData>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// Replace the signed-in user's profile via `PUT /api/profile`.
/// Returns the profile as the server stored it.
///
/// # Errors
///
/// Returns the server's validation message or a transport error.
pub async fn save_profile(profile: &ProfileData) -> Result<ProfileData, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/profile")
            .json(profile)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<ProfileData>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Fetch the link records behind the QR code from `GET /api/links`,
/// authenticating with the provider id token as a bearer credential.
///
/// # Errors
///
/// Returns an error string when the token or the link request fails.
pub async fn fetch_links() -> Result<Vec<RemoteLink>, String> {
    #[cfg(feature = "hydrate")]
    {
        let token = fetch_id_token().await?;
        let resp = gloo_net::http::Request::get("/api/links")
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<Vec<RemoteLink>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// Bind this browser's share id to the signed-in user.
///
/// # Errors
///
/// Returns the server's message (id taken, malformed) or a transport error.
pub async fn bind_share_id(profile_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "profileId": profile_id });
        let resp = gloo_net::http::Request::put("/api/profile/share-id")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile_id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Fetch a shared profile. `Ok(None)` when the share id is unknown.
///
/// # Errors
///
/// Returns an error string on server or transport failure.
pub async fn fetch_public_profile(id: &str) -> Result<Option<ProfileData>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&public_profile_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<ProfileData>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}
