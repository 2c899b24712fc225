use super::*;
use crate::link::LinkEntry;
use crate::platform::Platform;
use crate::store::MemoryStore;

#[test]
fn to_base36_known_values() {
    assert_eq!(to_base36(0), "0");
    assert_eq!(to_base36(35), "z");
    assert_eq!(to_base36(36), "10");
    assert_eq!(to_base36(1_295), "zz");
}

#[test]
fn generated_ids_are_nine_base36_chars() {
    for _ in 0..50 {
        let id = generate_profile_id();
        assert_eq!(id.len(), PROFILE_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()), "bad id {id}");
        assert!(is_valid_profile_id(&id));
    }
}

#[test]
fn generated_ids_differ() {
    assert_ne!(generate_profile_id(), generate_profile_id());
}

#[test]
fn is_valid_profile_id_rejects_bad_input() {
    assert!(!is_valid_profile_id(""));
    assert!(!is_valid_profile_id("ABC"));
    assert!(!is_valid_profile_id("abc/def"));
    assert!(!is_valid_profile_id(&"a".repeat(33)));
}

#[test]
fn ensure_profile_id_is_stable_across_calls() {
    let store = MemoryStore::new();
    let first = ensure_profile_id(&store).unwrap();
    let second = ensure_profile_id(&store).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        share_url("https://devlinks.app", &first),
        share_url("https://devlinks.app", &second)
    );
}

#[test]
fn ensure_profile_id_keeps_existing_value() {
    let store = MemoryStore::new();
    store.set_item(PROFILE_ID_STORAGE_KEY, "k3x9q0abc").unwrap();
    assert_eq!(ensure_profile_id(&store).unwrap(), "k3x9q0abc");
}

#[test]
fn ensure_profile_id_replaces_garbage() {
    let store = MemoryStore::new();
    store.set_item(PROFILE_ID_STORAGE_KEY, "").unwrap();
    let id = ensure_profile_id(&store).unwrap();
    assert_eq!(id.len(), PROFILE_ID_LEN);
    assert_eq!(store.get_item(PROFILE_ID_STORAGE_KEY), Some(id));
}

#[test]
fn share_url_joins_origin_and_id() {
    assert_eq!(share_url("http://localhost:3000", "abc"), "http://localhost:3000/profile/abc");
    assert_eq!(share_url("http://localhost:3000/", "abc"), "http://localhost:3000/profile/abc");
}

#[test]
fn qr_payload_lists_one_line_per_link() {
    let links = vec![
        LinkEntry { id: 1, platform: Platform::GitHub, link: "https://github.com/ada".to_owned() },
        LinkEntry { id: 2, platform: Platform::Other("Blog".to_owned()), link: "ada.dev".to_owned() },
    ];
    assert_eq!(qr_payload(&links), "GitHub: https://github.com/ada\nBlog: ada.dev");
    assert_eq!(qr_payload::<LinkEntry>(&[]), "");
}
