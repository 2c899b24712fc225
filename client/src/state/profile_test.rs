use ::profile::store::save_profile;
use ::profile::{LinkEntry, MemoryStore, Platform, StoreError};

use super::*;

#[test]
fn sync_status_messages() {
    assert_eq!(SyncStatus::Idle.message(), None);
    assert_eq!(SyncStatus::Saved.message(), Some("Your changes have been successfully saved!"));
    assert_eq!(SyncStatus::Failed("try later".into()).message(), Some("try later"));
}

#[test]
fn initial_editor_without_storage_is_starter() {
    let editor = initial_editor(&MemoryStore::new());
    assert_eq!(editor.links().len(), 1);
    assert_eq!(editor.links()[0].platform, Platform::GitHub);
}

#[test]
fn initial_editor_uses_stored_profile() {
    let store = MemoryStore::new();
    let stored = ProfileData {
        first_name: "Ada".into(),
        links: vec![LinkEntry { id: 4, platform: Platform::Twitter, link: "ada".into() }],
        ..ProfileData::default()
    };
    save_profile(&store, &stored).unwrap();

    let editor = initial_editor(&store);
    assert_eq!(editor.profile().first_name, "Ada");
    assert_eq!(editor.links()[0].id, 4);
    assert!(editor.can_share());
}

#[test]
fn initial_editor_with_stored_empty_links_stays_empty() {
    let store = MemoryStore::new();
    save_profile(&store, &ProfileData::default()).unwrap();
    assert!(initial_editor(&store).links().is_empty());
}

struct FullStore;

impl KeyValueStore for FullStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }
}

#[test]
fn failed_local_write_still_returns_snapshot() {
    let mut editor = ProfileEditor::starter();
    assert!(editor.update_link(1, LinkField::Link, "https://github.com/ada"));

    let (snapshot, written) = save_snapshot(&mut editor, &FullStore);
    assert!(matches!(written, Err(StoreError::Unavailable(_))));
    assert_eq!(snapshot.saved_links, snapshot.links);
    assert_eq!(snapshot.links[0].link, "https://github.com/ada");
}

#[test]
fn successful_local_write_persists_snapshot() {
    let store = MemoryStore::new();
    let mut editor = ProfileEditor::starter();
    let (snapshot, written) = save_snapshot(&mut editor, &store);
    assert!(written.is_ok());
    assert_eq!(initial_editor(&store).profile(), &snapshot);
}
