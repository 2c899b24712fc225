use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

const REQUIRED: [(&str, &str); 2] = [("DATABASE_URL", "postgres://localhost/devlinks"), ("IDENTITY_API_KEY", "key-123")];

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// AppConfig::from_lookup
// =============================================================================

#[test]
fn defaults_apply_when_optional_vars_unset() {
    let config = AppConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.identity_base_url, DEFAULT_IDENTITY_BASE_URL);
    assert_eq!(config.identity_token_url, DEFAULT_IDENTITY_TOKEN_URL);
    assert_eq!(config.public_origin, DEFAULT_PUBLIC_ORIGIN);
    assert!(!config.cookie_secure);
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(config.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
}

#[test]
fn missing_database_url_is_an_error() {
    let err = AppConfig::from_lookup(lookup_from(&[("IDENTITY_API_KEY", "k")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
}

#[test]
fn blank_api_key_counts_as_missing() {
    let err =
        AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("IDENTITY_API_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("IDENTITY_API_KEY")));
}

#[test]
fn invalid_port_is_reported_with_key() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("PORT", "eighty"));
    let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for PORT: \"eighty\"");
}

#[test]
fn cookie_secure_inferred_from_https_origin() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("PUBLIC_ORIGIN", "https://devlinks.example/"));
    let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert!(config.cookie_secure);
    assert_eq!(config.public_origin, "https://devlinks.example");
}

#[test]
fn explicit_cookie_secure_overrides_origin() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("PUBLIC_ORIGIN", "https://devlinks.example"));
    pairs.push(("COOKIE_SECURE", "off"));
    let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert!(!config.cookie_secure);
}

#[test]
fn identity_base_url_trailing_slash_trimmed() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("IDENTITY_BASE_URL", "http://localhost:9099/identitytoolkit.googleapis.com/v1/"));
    let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(config.identity_base_url, "http://localhost:9099/identitytoolkit.googleapis.com/v1");
}

#[test]
fn identity_token_url_is_configurable() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("IDENTITY_TOKEN_URL", "http://localhost:9099/securetoken.googleapis.com/v1/"));
    let config = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(config.identity_token_url, "http://localhost:9099/securetoken.googleapis.com/v1");
}
