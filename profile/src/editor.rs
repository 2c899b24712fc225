//! Profile editor state and the editor -> preview -> share flow.
//!
//! DESIGN
//! ======
//! `ProfileEditor` is a plain value: pages wrap it in a reactive signal and
//! call these methods from event handlers. Every mutation drops the flow
//! back to [`FlowStage::Editing`]; saving snapshots `links` into
//! `saved_links` before handing the profile to a [`KeyValueStore`].
//! Sharing is offered only once the flow has left `Editing`, so the public
//! page never lags behind what the user sees in the editor.

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;

use crate::link::{LinkEntry, LinkField, LinkId, ProfileData, next_link_id};
use crate::platform::Platform;
use crate::store::{KeyValueStore, StoreError, save_profile};

/// Where the user is in the editor flow. No stage is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowStage {
    #[default]
    Editing,
    Saved,
    Previewing,
    Sharing,
}

/// Client-side navigation or action that moves the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    Edit,
    Save,
    Preview,
    Share,
}

impl FlowStage {
    #[must_use]
    pub fn next(self, event: FlowEvent) -> Self {
        match event {
            FlowEvent::Edit => Self::Editing,
            FlowEvent::Save => Self::Saved,
            FlowEvent::Preview => Self::Previewing,
            FlowEvent::Share => Self::Sharing,
        }
    }

    /// False while there are edits that have not been saved.
    #[must_use]
    pub fn can_share(self) -> bool {
        self != Self::Editing
    }
}

/// Editable profile plus flow bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileEditor {
    profile: ProfileData,
    stage: FlowStage,
    image_loading: bool,
}

impl ProfileEditor {
    /// Editor over a profile that is already persisted (loaded from storage).
    #[must_use]
    pub fn from_profile(profile: ProfileData) -> Self {
        Self { profile, stage: FlowStage::Saved, ..Self::default() }
    }

    /// Editor for a first visit: one empty GitHub row, nothing else.
    #[must_use]
    pub fn starter() -> Self {
        let mut editor = Self::default();
        editor.add_link();
        editor
    }

    #[must_use]
    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    #[must_use]
    pub fn links(&self) -> &[LinkEntry] {
        &self.profile.links
    }

    #[must_use]
    pub fn saved_links(&self) -> &[LinkEntry] {
        &self.profile.saved_links
    }

    #[must_use]
    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    #[must_use]
    pub fn can_share(&self) -> bool {
        self.stage.can_share()
    }

    /// True while an avatar file is being encoded; only the avatar control blocks on it.
    #[must_use]
    pub fn image_loading(&self) -> bool {
        self.image_loading
    }

    /// Append a default entry and return its id.
    pub fn add_link(&mut self) -> LinkId {
        let id = next_link_id(&self.profile.links);
        self.profile.links.push(LinkEntry::new(id));
        self.touch();
        id
    }

    /// Drop the entry with `id`. Returns whether anything was removed.
    pub fn remove_link(&mut self, id: LinkId) -> bool {
        let before = self.profile.links.len();
        self.profile.links.retain(|l| l.id != id);
        let removed = self.profile.links.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Replace one field of the entry with `id`. Returns whether it existed.
    pub fn update_link(&mut self, id: LinkId, field: LinkField, value: &str) -> bool {
        let Some(entry) = self.profile.links.iter_mut().find(|l| l.id == id) else {
            return false;
        };
        *entry = match field {
            LinkField::Platform => LinkEntry { platform: Platform::parse(value), ..entry.clone() },
            LinkField::Link => LinkEntry { link: value.to_owned(), ..entry.clone() },
        };
        self.touch();
        true
    }

    pub fn set_first_name(&mut self, value: &str) {
        value.clone_into(&mut self.profile.first_name);
        self.touch();
    }

    pub fn set_last_name(&mut self, value: &str) {
        value.clone_into(&mut self.profile.last_name);
        self.touch();
    }

    pub fn set_email(&mut self, value: &str) {
        value.clone_into(&mut self.profile.email);
        self.touch();
    }

    /// Mark the avatar control busy while a file is read.
    pub fn begin_image_upload(&mut self) {
        self.image_loading = true;
    }

    /// Finish an avatar read. `None` (rejected or failed read) keeps the previous image.
    pub fn finish_image_upload(&mut self, data_url: Option<String>) {
        self.image_loading = false;
        if let Some(url) = data_url {
            self.profile.image = Some(url);
            self.touch();
        }
    }

    pub fn clear_image(&mut self) {
        self.profile.image = None;
        self.touch();
    }

    /// Replace the whole profile with a persisted copy, e.g. when the server
    /// copy arrives after hydration.
    pub fn replace_profile(&mut self, profile: ProfileData) {
        self.profile = profile;
        self.stage = FlowStage::Saved;
    }

    /// Snapshot links into `saved_links` and persist the full profile.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] from the storage write; the in-memory
    /// snapshot is kept either way so the preview still reflects it.
    pub fn save(&mut self, store: &impl KeyValueStore) -> Result<ProfileData, StoreError> {
        self.profile.saved_links = self.profile.links.clone();
        self.stage = self.stage.next(FlowEvent::Save);
        save_profile(store, &self.profile)?;
        Ok(self.profile.clone())
    }

    /// Record a navigation event (preview, share, back to editing).
    pub fn navigate(&mut self, event: FlowEvent) {
        self.stage = self.stage.next(event);
    }

    fn touch(&mut self) {
        self.stage = self.stage.next(FlowEvent::Edit);
    }
}
