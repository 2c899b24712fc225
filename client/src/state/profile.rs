//! Profile editor store shared by the editor, preview and share pages.
//!
//! DESIGN
//! ======
//! The editing rules live in `profile::ProfileEditor`; this store only wraps
//! it in signals and adds the sync status of the last server save. Local
//! storage is read once on mount through [`initial_editor`], then the server
//! copy (when there is one) replaces it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use profile::store::{PROFILE_STORAGE_KEY, load_profile};
use profile::{FlowEvent, KeyValueStore, LinkField, LinkId, ProfileData, ProfileEditor, StoreError};

/// Outcome of the most recent server save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

impl SyncStatus {
    /// Inline status line, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Saving => Some("Saving..."),
            Self::Saved => Some("Your changes have been successfully saved!"),
            Self::Failed(msg) => Some(msg),
        }
    }
}

/// Editor seeded from local storage, or the one-row starter when nothing is stored.
#[must_use]
pub fn initial_editor(store: &impl KeyValueStore) -> ProfileEditor {
    if store.get_item(PROFILE_STORAGE_KEY).is_some() {
        ProfileEditor::from_profile(load_profile(store))
    } else {
        ProfileEditor::starter()
    }
}

/// Save `editor` to `store`. The snapshot comes back even when the local
/// write fails, so the server save can still go ahead.
pub fn save_snapshot(editor: &mut ProfileEditor, store: &impl KeyValueStore) -> (ProfileData, Result<(), StoreError>) {
    let written = editor.save(store).map(|_| ());
    (editor.profile().clone(), written)
}

#[derive(Clone, Copy)]
pub struct ProfileStore {
    pub editor: RwSignal<ProfileEditor>,
    pub sync: RwSignal<SyncStatus>,
    /// Inline message for a rejected avatar file.
    pub image_error: RwSignal<Option<String>>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: RwSignal::new(ProfileEditor::starter()),
            sync: RwSignal::new(SyncStatus::Idle),
            image_error: RwSignal::new(None),
        }
    }

    pub fn load_local(&self, store: &impl KeyValueStore) {
        self.editor.set(initial_editor(store));
    }

    /// Adopt the server copy of the profile.
    pub fn apply_remote(&self, profile: ProfileData) {
        self.editor.update(|e| e.replace_profile(profile));
    }

    pub fn add_link(&self) {
        self.editor.update(|e| {
            e.add_link();
        });
    }

    pub fn remove_link(&self, id: LinkId) {
        self.editor.update(|e| {
            e.remove_link(id);
        });
    }

    pub fn update_link(&self, id: LinkId, field: LinkField, value: &str) {
        self.editor.update(|e| {
            e.update_link(id, field, value);
        });
    }

    pub fn set_first_name(&self, value: &str) {
        self.editor.update(|e| e.set_first_name(value));
    }

    pub fn set_last_name(&self, value: &str) {
        self.editor.update(|e| e.set_last_name(value));
    }

    pub fn set_email(&self, value: &str) {
        self.editor.update(|e| e.set_email(value));
    }

    pub fn begin_image_upload(&self) {
        self.image_error.set(None);
        self.editor.update(ProfileEditor::begin_image_upload);
    }

    /// Finish an upload. `Err` keeps the previous image and shows the message.
    pub fn finish_image_upload(&self, result: Result<String, String>) {
        match result {
            Ok(data_url) => self.editor.update(|e| e.finish_image_upload(Some(data_url))),
            Err(msg) => {
                self.image_error.set(Some(msg));
                self.editor.update(|e| e.finish_image_upload(None));
            }
        }
    }

    pub fn clear_image(&self) {
        self.editor.update(ProfileEditor::clear_image);
    }

    /// Snapshot links and write local storage. See [`save_snapshot`].
    pub fn save_local(&self, store: &impl KeyValueStore) -> (ProfileData, Result<(), StoreError>) {
        let mut outcome = None;
        self.editor.update(|e| outcome = Some(save_snapshot(e, store)));
        outcome.unwrap_or_else(|| (ProfileData::default(), Ok(())))
    }

    pub fn navigate(&self, event: FlowEvent) {
        self.editor.update(|e| e.navigate(event));
    }
}
