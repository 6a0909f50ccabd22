use super::*;

#[test]
fn push_appends_oldest_first() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "Blog created successfully".to_owned());
    state.push(ToastKind::Error, "An unexpected error occurred".to_owned());
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Error, "one".to_owned());
    let second = state.push(ToastKind::Error, "two".to_owned());
    state.dismiss(&first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "kept".to_owned());
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn push_returns_distinct_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a".to_owned());
    let b = state.push(ToastKind::Success, "b".to_owned());
    assert_ne!(a, b);
}
