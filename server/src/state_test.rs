use super::*;

#[tokio::test]
async fn app_state_shares_config_across_clones() {
    let state = test_helpers::test_app_state(test_helpers::MockIdentity::ok());
    let clone = state.clone();
    assert!(Arc::ptr_eq(&state.config, &clone.config));
    assert!(!clone.cookie_secure());
}

#[tokio::test]
async fn app_state_exposes_identity_provider() {
    let mock = test_helpers::MockIdentity::ok();
    let state = test_helpers::test_app_state(mock.clone());
    state.identity.send_password_reset("ada@example.com").await.unwrap();
    assert_eq!(mock.call_count(), 1);
}
