//! Transient notification state.
//!
//! A toast is shown until its dismissal timer fires. Each toast gets a
//! sequence number so a timer started for an older toast never clears a
//! newer one.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn success(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), kind: ToastKind::Success }
    }

    #[must_use]
    pub fn error(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), kind: ToastKind::Error }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    seq: u64,
}

impl ToastState {
    /// Replace the visible toast. Returns the id to pass to [`ToastState::dismiss`].
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.seq += 1;
        self.current = Some(toast);
        self.seq
    }

    /// Clear the toast if `id` is still the one on screen.
    pub fn dismiss(&mut self, id: u64) {
        if id == self.seq {
            self.current = None;
        }
    }
}
