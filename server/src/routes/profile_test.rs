use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::state::test_helpers::{MockIdentity, test_app_state};

async fn send(req: Request<Body>) -> Response {
    api_routes(test_app_state(MockIdentity::ok())).oneshot(req).await.unwrap()
}

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// error mapping
// =============================================================================

#[tokio::test]
async fn profile_errors_map_to_statuses() {
    assert_eq!(profile_error_response(&ProfileError::InvalidImage).status(), StatusCode::BAD_REQUEST);
    assert_eq!(profile_error_response(&ProfileError::TooManyLinks).status(), StatusCode::BAD_REQUEST);
    assert_eq!(profile_error_response(&ProfileError::InvalidShareId).status(), StatusCode::BAD_REQUEST);
    assert_eq!(profile_error_response(&ProfileError::ShareIdTaken).status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn database_errors_hide_details() {
    let resp = profile_error_response(&ProfileError::Db(sqlx::Error::PoolTimedOut));
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "unavailable");
    assert_eq!(body["message"], "Something went wrong. Please try again later.");
}

#[tokio::test]
async fn empty_qr_payload_is_not_found() {
    let resp = qr_error_response(&QrError::Empty);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "no_links");
}

// =============================================================================
// auth requirements
// =============================================================================

#[tokio::test]
async fn get_profile_requires_session() {
    let resp = send(Request::builder().uri("/api/profile").body(Body::empty()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn put_profile_requires_session() {
    let req = Request::builder()
        .method("PUT")
        .uri("/api/profile")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"firstName":"Ada"}"#))
        .unwrap();
    assert_eq!(send(req).await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn links_require_session_or_bearer() {
    let resp = send(Request::builder().uri("/api/links").body(Body::empty()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn qrcode_requires_session() {
    let resp = send(Request::builder().uri("/api/qrcode.png").body(Body::empty()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// public profile
// =============================================================================

#[tokio::test]
async fn malformed_share_id_is_not_found() {
    let resp = send(Request::builder().uri("/api/public/NOT-AN-ID").body(Body::empty()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Profile not found.");
}
