//! Local-storage persistence for [`ProfileData`].
//!
//! ARCHITECTURE
//! ============
//! The browser's `localStorage` is modelled as a [`KeyValueStore`] so the
//! codec and load/save rules run natively in tests against [`MemoryStore`].
//! The stored blob is the profile JSON plus a top-level `version`; blobs
//! written before versioning have no `version` and read as version 0.
//!
//! ERROR HANDLING
//! ==============
//! Loading never fails: an absent, unreadable, or too-new blob yields the
//! default profile and a `tracing` warning. Saving reports [`StoreError`].

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::link::ProfileData;

/// Storage key holding the serialized profile.
pub const PROFILE_STORAGE_KEY: &str = "profileData";
/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unsupported profile schema version {found} (max {max})", max = SCHEMA_VERSION)]
    UnsupportedVersion { found: u32 },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backing storage rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`], used by tests and as the SSR stand-in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Serialize)]
struct StoredProfileRef<'a> {
    version: u32,
    #[serde(flatten)]
    profile: &'a ProfileData,
}

#[derive(Deserialize)]
struct StoredProfile {
    #[serde(default)]
    version: u32,
    #[serde(flatten)]
    profile: ProfileData,
}

/// Serialize a profile into the versioned storage blob.
///
/// # Errors
///
/// Returns [`StoreError::Serialize`] if JSON encoding fails.
pub fn encode_profile(profile: &ProfileData) -> Result<String, StoreError> {
    Ok(serde_json::to_string(&StoredProfileRef { version: SCHEMA_VERSION, profile })?)
}

/// Parse a storage blob, accepting legacy unversioned blobs.
///
/// # Errors
///
/// Returns [`StoreError::Serialize`] for malformed JSON and
/// [`StoreError::UnsupportedVersion`] for blobs written by a newer schema.
pub fn decode_profile(raw: &str) -> Result<ProfileData, StoreError> {
    let stored: StoredProfile = serde_json::from_str(raw)?;
    if stored.version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion { found: stored.version });
    }
    let mut profile = stored.profile;
    profile.assign_missing_ids();
    Ok(profile)
}

/// Load the profile from `store`, defaulting every field when absent or unreadable.
pub fn load_profile(store: &impl KeyValueStore) -> ProfileData {
    let Some(raw) = store.get_item(PROFILE_STORAGE_KEY) else {
        return ProfileData::default();
    };
    match decode_profile(&raw) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable stored profile");
            ProfileData::default()
        }
    }
}

/// Overwrite the stored profile.
///
/// # Errors
///
/// Returns a [`StoreError`] if encoding fails or the storage rejects the write.
pub fn save_profile(store: &impl KeyValueStore, profile: &ProfileData) -> Result<(), StoreError> {
    let raw = encode_profile(profile)?;
    store.set_item(PROFILE_STORAGE_KEY, &raw)
}
