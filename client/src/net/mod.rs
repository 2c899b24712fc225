//! Networking modules for the devlinks REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every HTTP call the pages make and `types` holds the response
//! shapes that are not already defined by the shared `profile` crate.

pub mod api;
pub mod types;
