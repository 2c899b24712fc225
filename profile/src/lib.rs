//! Shared profile model for the devlinks server and client.
//!
//! This crate owns everything that both sides must agree on: the link and
//! profile shapes, the platform style table, the editor state machine, the
//! local-storage and query-string codecs, share-id generation, and the
//! credential checks that run before any identity-provider call. It has no
//! browser or database dependencies so it can be unit tested natively.

#[cfg(test)]
#[path = "log_capture_test.rs"]
mod log_capture;

pub mod data_url;
pub mod editor;
pub mod identity;
pub mod link;
pub mod platform;
pub mod preview;
pub mod share;
pub mod store;

pub use editor::{FlowEvent, FlowStage, ProfileEditor};
pub use identity::{IdentityError, ValidationError};
pub use link::{LinkEntry, LinkField, LinkId, LinkLike, ProfileData, RemoteLink};
pub use platform::{Icon, Platform, PlatformStyle};
pub use store::{KeyValueStore, MemoryStore, StoreError};
