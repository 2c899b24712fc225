use super::*;

#[test]
fn server_side_reads_miss() {
    assert_eq!(BrowserStore.get_item("profileData"), None);
}

#[test]
fn server_side_writes_are_unavailable() {
    let err = BrowserStore.set_item("profileId", "k3x9q0a1z").unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(ref msg) if msg.contains("profileId")));
}

#[test]
fn load_profile_falls_back_to_default_without_storage() {
    let loaded = profile::store::load_profile(&BrowserStore);
    assert_eq!(loaded, profile::ProfileData::default());
}
