//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server guard already redirects page loads without a session; this
//! covers sessions that expire while a page is open.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/auth/login";

/// Auth has resolved and there is no user.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.is_signed_out()
}

/// Redirect to the login page whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
