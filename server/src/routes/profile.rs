//! Profile, link, share-id and QR code routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use profile::identity::ErrorBody;
use profile::share::qr_payload;
use profile::{IdentityError, ProfileData};
use serde::Deserialize;
use uuid::Uuid;

use super::api_error;
use super::auth::{ApiUser, AuthUser};
use crate::services::profile::{self as profile_svc, ProfileError};
use crate::services::qr::{self, QrError};
use crate::state::AppState;

/// Status code + body for a [`ProfileError`]. Database details stay in the log.
pub(crate) fn profile_error_response(err: &ProfileError) -> Response {
    let (status, code) = match err {
        ProfileError::Db(e) => {
            tracing::error!(error = %e, "profile query failed");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, IdentityError::Unavailable);
        }
        ProfileError::InvalidImage => (StatusCode::BAD_REQUEST, "invalid_image"),
        ProfileError::TooManyLinks => (StatusCode::BAD_REQUEST, "too_many_links"),
        ProfileError::InvalidShareId => (StatusCode::BAD_REQUEST, "invalid_share_id"),
        ProfileError::ShareIdTaken => (StatusCode::CONFLICT, "share_id_taken"),
    };
    api_error(status, ErrorBody { error: code.to_owned(), message: err.to_string() })
}

/// `GET /api/profile`: stored profile, or an empty one before the first save.
pub async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> Response {
    match profile_svc::load_profile(&state.pool, auth.user.id).await {
        Ok(stored) => Json(stored.unwrap_or_default()).into_response(),
        Err(e) => profile_error_response(&e),
    }
}

/// `PUT /api/profile`: replace the profile and its links.
pub async fn put_profile(State(state): State<AppState>, auth: AuthUser, Json(body): Json<ProfileData>) -> Response {
    match profile_svc::save_profile(&state.pool, auth.user.id, body).await {
        Ok(saved) => Json(saved).into_response(),
        Err(e) => profile_error_response(&e),
    }
}

/// `GET /api/links`: link records for the session user or bearer token holder.
pub async fn list_links(State(state): State<AppState>, api_user: ApiUser) -> Response {
    match profile_svc::list_links(&state.pool, api_user.user_id).await {
        Ok(links) => Json(links).into_response(),
        Err(e) => profile_error_response(&e),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareIdRequest {
    profile_id: String,
}

/// `PUT /api/profile/share-id`: bind this browser's share id to the user.
pub async fn put_share_id(State(state): State<AppState>, auth: AuthUser, Json(body): Json<ShareIdRequest>) -> Response {
    match profile_svc::bind_share_id(&state.pool, auth.user.id, body.profile_id.trim()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => profile_error_response(&e),
    }
}

/// `GET /api/public/{id}`: read-only profile behind a share id.
pub async fn public_profile(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match profile_svc::public_profile(&state.pool, &id).await {
        Ok(Some(found)) => Json(found).into_response(),
        Ok(None) => api_error(
            StatusCode::NOT_FOUND,
            ErrorBody { error: "not_found".into(), message: "Profile not found.".into() },
        ),
        Err(e) => profile_error_response(&e),
    }
}

// =============================================================================
// QR CODES
// =============================================================================

fn qr_error_response(err: &QrError) -> Response {
    match err {
        QrError::Empty => api_error(
            StatusCode::NOT_FOUND,
            ErrorBody { error: "no_links".into(), message: "Add a link to generate a QR code.".into() },
        ),
        QrError::Encode(_) | QrError::Png(_) => {
            tracing::warn!(error = %err, "qr render failed");
            api_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody { error: "qr_failed".into(), message: "Links are too long for a QR code.".into() },
            )
        }
    }
}

async fn user_payload(state: &AppState, user_id: Uuid) -> Result<String, Response> {
    let links = profile_svc::list_links(&state.pool, user_id)
        .await
        .map_err(|e| profile_error_response(&e))?;
    Ok(qr_payload(&links))
}

/// `GET /api/qrcode.svg`
pub async fn qrcode_svg(State(state): State<AppState>, auth: AuthUser) -> Response {
    let payload = match user_payload(&state, auth.user.id).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    match qr::render_svg(&payload) {
        Ok(svg) => ([(CONTENT_TYPE, "image/svg+xml"), (CACHE_CONTROL, "no-store")], svg).into_response(),
        Err(e) => qr_error_response(&e),
    }
}

/// `GET /api/qrcode.png`
pub async fn qrcode_png(State(state): State<AppState>, auth: AuthUser) -> Response {
    let payload = match user_payload(&state, auth.user.id).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    match qr::render_png(&payload) {
        Ok(png) => ([(CONTENT_TYPE, "image/png"), (CACHE_CONTROL, "no-store")], png).into_response(),
        Err(e) => qr_error_response(&e),
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
