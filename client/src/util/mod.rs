//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clipboard, file input,
//! downloads) from page and component logic. Each has an SSR fallback so
//! the same components render on the server.

pub mod auth;
pub mod browser;
pub mod file;
pub mod storage;
