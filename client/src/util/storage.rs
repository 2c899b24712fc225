//! `localStorage` as a [`KeyValueStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile codecs and share-id helpers in the `profile` crate are written
//! against `KeyValueStore`; this is the browser implementation they get at
//! runtime. On the server there is no storage: reads miss and writes fail.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use profile::{KeyValueStore, StoreError};

/// Handle to `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|_| StoreError::Unavailable(format!("localStorage rejected write to {key}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Err(StoreError::Unavailable(format!("no browser storage for {key}")))
        }
    }
}
