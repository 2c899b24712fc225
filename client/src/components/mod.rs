//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor rows, the profile card and its phone
//! frame, the page header and toasts. They read shared state from Leptos
//! context and leave routing decisions to `pages`.

pub mod header;
pub mod link_item;
pub mod phone_preview;
pub mod profile_card;
pub mod toast;
