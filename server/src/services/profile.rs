//! Profile and link persistence.
//!
//! DESIGN
//! ======
//! The server copy of a profile is authoritative; the browser keeps a
//! local-storage cache. A save replaces the whole profile in one
//! transaction: upsert the `profiles` row, delete the user's links, insert
//! the new list with its position. Concurrent saves are last-write-wins.
//!
//! Share ids are generated in the browser and bound here on first use, so
//! one user may own several ids (one per browser) but an id never moves
//! between users.

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;

use profile::data_url::is_image_data_url;
use profile::share::is_valid_profile_id;
use profile::{LinkEntry, Platform, ProfileData, RemoteLink};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Upper bound on links kept per profile.
pub const MAX_LINKS: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("image must be a base64 image data URL")]
    InvalidImage,
    #[error("too many links (max {max})", max = MAX_LINKS)]
    TooManyLinks,
    #[error("invalid share id")]
    InvalidShareId,
    #[error("share id already belongs to another user")]
    ShareIdTaken,
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Validate and canonicalize a profile before it is written.
///
/// Names and email are trimmed, links keep their order, and `saved_links`
/// mirrors `links` because only saved state reaches the server.
///
/// # Errors
///
/// Returns [`ProfileError::InvalidImage`] or [`ProfileError::TooManyLinks`].
pub fn normalize_profile(mut data: ProfileData) -> Result<ProfileData, ProfileError> {
    if let Some(image) = data.image.as_deref() {
        if image.is_empty() {
            data.image = None;
        } else if !is_image_data_url(image) {
            return Err(ProfileError::InvalidImage);
        }
    }
    if data.links.len() > MAX_LINKS {
        return Err(ProfileError::TooManyLinks);
    }
    data.first_name = data.first_name.trim().to_owned();
    data.last_name = data.last_name.trim().to_owned();
    data.email = data.email.trim().to_owned();
    for link in &mut data.links {
        link.link = link.link.trim().to_owned();
    }
    data.assign_missing_ids();
    data.saved_links = data.links.clone();
    Ok(data)
}

fn link_entry_from_row(row: &PgRow, position: usize) -> LinkEntry {
    let local_id: i64 = row.get("local_id");
    let platform: String = row.get("platform");
    LinkEntry {
        id: u64::try_from(local_id).unwrap_or(position as u64 + 1),
        platform: Platform::from(platform),
        link: row.get("link"),
    }
}

fn remote_link_from_row(row: &PgRow) -> RemoteLink {
    let id: Uuid = row.get("id");
    let user_id: Uuid = row.get("user_id");
    let platform: String = row.get("platform");
    let version: i32 = row.get("version");
    RemoteLink {
        id: id.to_string(),
        platform: Platform::from(platform),
        link: row.get("link"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        user_id: user_id.to_string(),
        version: i64::from(version),
    }
}

// =============================================================================
// QUERIES
// =============================================================================

async fn load_links(pool: &PgPool, user_id: Uuid) -> Result<Vec<LinkEntry>, sqlx::Error> {
    let rows = sqlx::query("SELECT local_id, platform, link FROM links WHERE user_id = $1 ORDER BY position")
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(rows
        .iter()
        .enumerate()
        .map(|(i, row)| link_entry_from_row(row, i))
        .collect())
}

/// Stored profile for `user_id`, or `None` when the user never saved.
pub async fn load_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileData>, ProfileError> {
    let row = sqlx::query("SELECT first_name, last_name, email, image FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    let Some(row) = row else {
        return Ok(None);
    };

    let links = load_links(pool, user_id).await?;
    Ok(Some(ProfileData {
        image: row.get("image"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        saved_links: links.clone(),
        links,
    }))
}

/// Replace the stored profile and links atomically. Returns what was stored.
pub async fn save_profile(pool: &PgPool, user_id: Uuid, data: ProfileData) -> Result<ProfileData, ProfileError> {
    let data = normalize_profile(data)?;
    let mut tx = pool.begin().await?;

    sqlx::query(
        r"INSERT INTO profiles (user_id, first_name, last_name, email, image, updated_at)
          VALUES ($1, $2, $3, $4, $5, now())
          ON CONFLICT (user_id) DO UPDATE SET
              first_name = EXCLUDED.first_name,
              last_name = EXCLUDED.last_name,
              email = EXCLUDED.email,
              image = EXCLUDED.image,
              updated_at = now()",
    )
    .bind(user_id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(data.image.as_deref())
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM links WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    for (position, link) in data.links.iter().enumerate() {
        sqlx::query(
            r"INSERT INTO links (user_id, position, local_id, platform, link)
              VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user_id)
        .bind(i32::try_from(position).unwrap_or(i32::MAX))
        .bind(i64::try_from(link.id).unwrap_or(i64::MAX))
        .bind(link.platform.as_str())
        .bind(&link.link)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(%user_id, links = data.links.len(), "profile saved");
    Ok(data)
}

/// Link API records for `user_id`, ordered by position.
pub async fn list_links(pool: &PgPool, user_id: Uuid) -> Result<Vec<RemoteLink>, ProfileError> {
    let rows = sqlx::query(
        r#"SELECT id, user_id, platform, link, version,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.MS"Z"') AS created_at,
                  to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.MS"Z"') AS updated_at
           FROM links
           WHERE user_id = $1
           ORDER BY position"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(remote_link_from_row).collect())
}

/// Bind a browser-generated share id to `user_id`. Rebinding to the same user is a no-op.
pub async fn bind_share_id(pool: &PgPool, user_id: Uuid, share_id: &str) -> Result<(), ProfileError> {
    if !is_valid_profile_id(share_id) {
        return Err(ProfileError::InvalidShareId);
    }

    let row = sqlx::query(
        r"INSERT INTO share_ids (id, user_id) VALUES ($1, $2)
          ON CONFLICT (id) DO UPDATE SET id = EXCLUDED.id
          RETURNING user_id",
    )
    .bind(share_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let owner: Uuid = row.get("user_id");
    if owner != user_id {
        tracing::warn!(%user_id, share_id, "share id already bound to another user");
        return Err(ProfileError::ShareIdTaken);
    }
    Ok(())
}

/// Public profile behind a share id. `None` when the id is unknown.
pub async fn public_profile(pool: &PgPool, share_id: &str) -> Result<Option<ProfileData>, ProfileError> {
    if !is_valid_profile_id(share_id) {
        return Ok(None);
    }
    let row = sqlx::query("SELECT user_id FROM share_ids WHERE id = $1")
        .bind(share_id)
        .fetch_optional(pool)
        .await?;
    let Some(row) = row else {
        return Ok(None);
    };
    let user_id: Uuid = row.get("user_id");
    Ok(Some(load_profile(pool, user_id).await?.unwrap_or_default()))
}
