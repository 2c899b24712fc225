use super::*;
use crate::link::LinkEntry;
use crate::platform::Platform;

fn sample_profile() -> ProfileData {
    ProfileData {
        image: Some("data:image/png;base64,iVBORw0KGgo=".to_owned()),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        links: vec![
            LinkEntry { id: 1, platform: Platform::GitHub, link: "https://github.com/ada".to_owned() },
            LinkEntry { id: 3, platform: Platform::Other("Mastodon".to_owned()), link: "@ada".to_owned() },
        ],
        saved_links: vec![LinkEntry { id: 1, platform: Platform::GitHub, link: "https://github.com/ada".to_owned() }],
    }
}

#[test]
fn save_then_load_yields_equal_profile() {
    let store = MemoryStore::new();
    let profile = sample_profile();
    save_profile(&store, &profile).unwrap();
    assert_eq!(load_profile(&store), profile);
}

#[test]
fn encoded_blob_carries_schema_version() {
    let raw = encode_profile(&sample_profile()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], SCHEMA_VERSION);
    assert_eq!(value["firstName"], "Ada");
}

#[test]
fn load_defaults_when_key_absent() {
    let store = MemoryStore::new();
    assert_eq!(load_profile(&store), ProfileData::default());
}

#[test]
fn load_defaults_when_blob_is_corrupt() {
    let store = MemoryStore::new();
    store.set_item(PROFILE_STORAGE_KEY, "{not json").unwrap();
    assert_eq!(load_profile(&store), ProfileData::default());
}

#[test]
fn legacy_unversioned_blob_loads() {
    let raw = r#"{"links":[{"id":1,"platform":"GitHub","link":""}],"savedLinks":[],"image":null,"firstName":"Ada","lastName":"","email":""}"#;
    let profile = decode_profile(raw).unwrap();
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.links, vec![LinkEntry::new(1)]);
}

#[test]
fn partial_blob_defaults_missing_fields() {
    let profile = decode_profile(r#"{"version":1,"email":"a@b.co"}"#).unwrap();
    assert_eq!(profile.email, "a@b.co");
    assert!(profile.links.is_empty());
    assert!(profile.saved_links.is_empty());
}

#[test]
fn future_schema_version_is_rejected_and_load_defaults() {
    let raw = r#"{"version":99,"firstName":"Ada"}"#;
    let err = decode_profile(raw).expect_err("future version should be rejected");
    assert!(matches!(err, StoreError::UnsupportedVersion { found: 99 }));

    let store = MemoryStore::new();
    store.set_item(PROFILE_STORAGE_KEY, raw).unwrap();
    assert_eq!(load_profile(&store), ProfileData::default());
}

#[test]
fn save_overwrites_previous_blob() {
    let store = MemoryStore::new();
    save_profile(&store, &sample_profile()).unwrap();
    let replacement = ProfileData { first_name: "Grace".to_owned(), ..ProfileData::default() };
    save_profile(&store, &replacement).unwrap();
    assert_eq!(load_profile(&store), replacement);
}

#[test]
fn unreadable_link_id_keeps_rest_of_profile() {
    let raw = r#"{"version":1,"firstName":"Ada","email":"ada@example.com",
        "links":[{"id":"a1","platform":"GitHub","link":"https://github.com/ada"},{"id":2,"platform":"YouTube","link":"y"}]}"#;
    let store = MemoryStore::new();
    store.set_item(PROFILE_STORAGE_KEY, raw).unwrap();

    let profile = load_profile(&store);
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.email, "ada@example.com");
    let ids: Vec<_> = profile.links.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(profile.links[0].link, "https://github.com/ada");
}

#[test]
fn unreadable_blob_is_logged() {
    crate::log_capture::install();
    let store = MemoryStore::new();
    store.set_item(PROFILE_STORAGE_KEY, "{not json").unwrap();
    assert_eq!(load_profile(&store), ProfileData::default());
    assert!(!crate::log_capture::warnings_containing("discarding unreadable stored profile").is_empty());
}
