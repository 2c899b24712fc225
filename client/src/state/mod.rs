//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one instance of each state type; pages and components read
//! them with `expect_context`. The types here are plain data or thin signal
//! wrappers so their logic can be unit tested without a browser.

pub mod auth;
pub mod profile;
pub mod toast;
