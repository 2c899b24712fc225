//! Session and user bookkeeping.
//!
//! ARCHITECTURE
//! ============
//! A successful provider sign-in upserts a local `users` row keyed by the
//! provider's user id, then issues an opaque random session token stored
//! alongside the provider ID and refresh tokens. The browser only ever sees
//! the opaque token (HttpOnly cookie); the ID token is handed out on request
//! through `GET /api/auth/id-token` for callers of the link API, renewed
//! with the refresh token once it is close to expiry.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::identity::{IdentityProvider, IdentityProviderError, TokenGrant};

/// An ID token with less than this many seconds left is renewed before use.
pub const ID_TOKEN_REFRESH_MARGIN_SECS: i64 = 300;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Clamp a configured TTL into the range Postgres `make_interval` accepts.
pub(crate) fn ttl_hours_param(ttl_hours: i64) -> i32 {
    i32::try_from(ttl_hours.max(1)).unwrap_or(i32::MAX)
}

/// User row returned from session validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

/// Insert or refresh the local user for a provider account. Returns the user's UUID.
pub async fn upsert_user(pool: &PgPool, provider_uid: &str, email: &str) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query(
        r"INSERT INTO users (provider_uid, email)
          VALUES ($1, $2)
          ON CONFLICT (provider_uid) DO UPDATE SET email = EXCLUDED.email
          RETURNING id",
    )
    .bind(provider_uid)
    .bind(email)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

/// Look up the local user for a provider account.
pub async fn user_by_provider_uid(pool: &PgPool, provider_uid: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query("SELECT id, email FROM users WHERE provider_uid = $1")
        .bind(provider_uid)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| SessionUser { id: r.get("id"), email: r.get("email") }))
}

/// Provider tokens held by a live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredIdToken {
    pub id_token: String,
    pub refresh_token: String,
    /// Seconds until the ID token expires; negative once it has.
    pub remaining_secs: i64,
}

impl StoredIdToken {
    /// Whether the ID token should be renewed before it is handed out.
    /// Sessions without a refresh token keep serving what they have.
    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        !self.refresh_token.is_empty() && self.remaining_secs <= ID_TOKEN_REFRESH_MARGIN_SECS
    }
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid, grant: &TokenGrant, ttl_hours: i64) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query(
        r"INSERT INTO sessions (token, user_id, id_token, refresh_token, id_token_expires_at, expires_at)
          VALUES ($1, $2, $3, $4, now() + make_interval(secs => $5::double precision),
                  now() + make_interval(hours => $6))",
    )
    .bind(&token)
    .bind(user_id)
    .bind(&grant.id_token)
    .bind(&grant.refresh_token)
    .bind(grant.expires_in_secs)
    .bind(ttl_hours_param(ttl_hours))
    .execute(pool)
    .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.email
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser { id: r.get("id"), email: r.get("email") }))
}

/// Provider tokens stored with a live session.
pub async fn session_id_token(pool: &PgPool, token: &str) -> Result<Option<StoredIdToken>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT id_token, refresh_token,
                 EXTRACT(EPOCH FROM (id_token_expires_at - now()))::BIGINT AS remaining_secs
          FROM sessions
          WHERE token = $1 AND expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| StoredIdToken {
        id_token: r.get("id_token"),
        refresh_token: r.get("refresh_token"),
        remaining_secs: r.get("remaining_secs"),
    }))
}

/// Store a renewed ID token. An empty refresh token keeps the current one.
pub async fn update_session_tokens(pool: &PgPool, token: &str, grant: &TokenGrant) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"UPDATE sessions
          SET id_token = $2,
              refresh_token = COALESCE(NULLIF($3, ''), refresh_token),
              id_token_expires_at = now() + make_interval(secs => $4::double precision)
          WHERE token = $1",
    )
    .bind(token)
    .bind(&grant.id_token)
    .bind(&grant.refresh_token)
    .bind(grant.expires_in_secs)
    .execute(pool)
    .await?;
    Ok(())
}

/// Renew `stored` at the provider when it is about to expire.
///
/// `Ok(None)` means the stored ID token is still good to hand out.
///
/// # Errors
///
/// Returns the provider failure; a revoked refresh token classifies as `NoSession`.
pub async fn refresh_if_stale(
    identity: &dyn IdentityProvider,
    stored: &StoredIdToken,
) -> Result<Option<TokenGrant>, IdentityProviderError> {
    if !stored.needs_refresh() {
        return Ok(None);
    }
    let grant = identity.refresh(&stored.refresh_token).await?;
    tracing::debug!(expires_in_secs = grant.expires_in_secs, "id token refreshed");
    Ok(Some(grant))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
