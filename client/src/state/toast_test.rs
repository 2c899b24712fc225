use super::*;

fn toast(title: &str) -> Toast {
    Toast { title: title.into(), description: String::new(), kind: ToastKind::Success }
}

#[test]
fn show_sets_current_toast() {
    let mut state = ToastState::default();
    state.show(toast("Link copied!"));
    assert_eq!(state.current.as_ref().map(|t| t.title.as_str()), Some("Link copied!"));
}

#[test]
fn dismiss_clears_matching_toast() {
    let mut state = ToastState::default();
    let id = state.show(toast("a"));
    state.dismiss(id);
    assert!(state.current.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = ToastState::default();
    let first = state.show(toast("first"));
    state.show(toast("second"));
    state.dismiss(first);
    assert_eq!(state.current.map(|t| t.title), Some("second".to_owned()));
}

#[test]
fn toast_duration_is_three_seconds() {
    assert_eq!(TOAST_DURATION_MS, 3_000);
}

#[test]
fn error_constructor_sets_kind() {
    let t = Toast::error("Copy failed", "Could not copy text to the clipboard.");
    assert_eq!(t.kind, ToastKind::Error);
    assert_eq!(Toast::success("Saved", "").kind, ToastKind::Success);
}
