//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own provider calls and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod identity;
pub mod profile;
pub mod qr;
pub mod session;
