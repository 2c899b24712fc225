//! Share ids, share URLs and the QR text payload.

#[cfg(test)]
#[path = "share_test.rs"]
mod tests;

use uuid::Uuid;

use crate::link::LinkLike;
use crate::store::{KeyValueStore, StoreError};

/// Storage key holding this browser's share id.
pub const PROFILE_ID_STORAGE_KEY: &str = "profileId";
/// Length of generated share ids.
pub const PROFILE_ID_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Render `n` in lowercase base 36.
#[must_use]
pub fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Fresh random share id: [`PROFILE_ID_LEN`] base-36 characters.
#[must_use]
pub fn generate_profile_id() -> String {
    let encoded = to_base36(Uuid::new_v4().as_u128());
    let tail = &encoded[encoded.len().saturating_sub(PROFILE_ID_LEN)..];
    format!("{tail:0>width$}", width = PROFILE_ID_LEN)
}

/// Whether `id` looks like something [`generate_profile_id`] produced.
#[must_use]
pub fn is_valid_profile_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 32 && id.bytes().all(|b| BASE36.contains(&b))
}

/// Return the stored share id, generating and persisting one on first use.
/// An existing id is never regenerated.
///
/// # Errors
///
/// Returns the [`StoreError`] if persisting a newly generated id fails.
pub fn ensure_profile_id(store: &impl KeyValueStore) -> Result<String, StoreError> {
    if let Some(existing) = store.get_item(PROFILE_ID_STORAGE_KEY).filter(|id| is_valid_profile_id(id)) {
        return Ok(existing);
    }
    let id = generate_profile_id();
    store.set_item(PROFILE_ID_STORAGE_KEY, &id)?;
    Ok(id)
}

/// `{origin}/profile/{id}`.
#[must_use]
pub fn share_url(origin: &str, id: &str) -> String {
    format!("{}/profile/{id}", origin.trim_end_matches('/'))
}

/// QR text: one `platform: link` line per link.
#[must_use]
pub fn qr_payload<L: LinkLike>(links: &[L]) -> String {
    links
        .iter()
        .map(|l| format!("{}: {}", l.platform(), l.url()))
        .collect::<Vec<_>>()
        .join("\n")
}
