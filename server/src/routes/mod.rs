//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it together with Leptos SSR
//! rendering under a single Axum router. Page routes sit behind the session
//! guard; API routes authenticate per handler through extractors and answer
//! `401` instead of redirecting.

pub mod auth;
pub mod guard;
pub mod profile;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum::routing::{get, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use ::profile::identity::ErrorBody;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Request body cap for profile saves; avatars travel inline as data URLs.
pub const PROFILE_BODY_LIMIT: usize = 4 * 1024 * 1024;

/// JSON error response with the shared `{error, message}` body.
pub(crate) fn api_error(status: StatusCode, body: impl Into<ErrorBody>) -> Response {
    (status, Json(body.into())).into_response()
}

/// JSON API routes.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/reset", post(auth::reset))
        .route("/api/auth/id-token", get(auth::id_token))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/profile",
            get(profile::get_profile)
                .put(profile::put_profile)
                .layer(DefaultBodyLimit::max(PROFILE_BODY_LIMIT)),
        )
        .route("/api/profile/share-id", put(profile::put_share_id))
        .route("/api/links", get(profile::list_links))
        .route("/api/public/{id}", get(profile::public_profile))
        .route("/api/qrcode.svg", get(profile::qrcode_svg))
        .route("/api/qrcode.png", get(profile::qrcode_png))
        .route("/profile/{id}", get(redirect_share_url))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Share URLs point at `/profile/{id}`; the read-only page lives at `/p/{id}`.
async fn redirect_share_url(Path(id): Path<String>) -> Redirect {
    Redirect::temporary(&format!("/p/{id}"))
}

/// Leptos SSR frontend: API routes + guarded Leptos pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());
    let leptos_router = guard::guarded(leptos_router, state.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
