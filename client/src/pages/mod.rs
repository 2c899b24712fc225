//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, saving, redirects)
//! and delegates rendering details to `components`. The `/auth/*` pages are
//! public; the `/profile/*` pages sit behind the server's session guard.

pub mod customize_links;
pub mod forgot_password;
pub mod login;
pub mod preview;
pub mod public_profile;
pub mod qrcode;
pub mod share;
pub mod signup;
