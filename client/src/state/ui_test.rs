use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_toasts() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(state.toasts.is_empty());
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn push_toast_assigns_increasing_ids() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Success, "Saved");
    let b = state.push_toast(ToastKind::Error, "Failed");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_toast_removes_only_target() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Info, "one");
    state.push_toast(ToastKind::Info, "two");
    state.dismiss_toast(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
}

#[test]
fn oldest_toasts_drop_past_limit() {
    let mut state = UiState::default();
    for n in 0..6 {
        state.push_toast(ToastKind::Info, format!("t{n}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].message, "t2");
}

#[test]
fn toast_kind_maps_to_css_class() {
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}
