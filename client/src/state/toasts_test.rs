use super::*;
use sitegen::GenerationError;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().toasts().is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notice::blank_prompt());
    let b = state.push(Notice::blank_prompt());
    assert!(b > a);
    assert_eq!(state.toasts().len(), 2);
    assert_eq!(state.toasts()[0].message, "Please enter a prompt!");
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = ToastState::default();
    let a = state.push(Notice::blank_prompt());
    let b = state.push(Notice::generation_failed(&GenerationError::EmptyResponse));
    state.dismiss(a);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, b);
    state.dismiss(a);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn oldest_toast_dropped_past_limit() {
    let mut state = ToastState::default();
    let first = state.push(Notice::blank_prompt());
    for _ in 0..MAX_TOASTS {
        state.push(Notice::blank_prompt());
    }
    assert_eq!(state.toasts().len(), MAX_TOASTS);
    assert!(state.toasts().iter().all(|t| t.id != first));
}

#[test]
fn toast_class_follows_level() {
    let mut state = ToastState::default();
    state.push(Notice::blank_prompt());
    state.push(Notice::generation_failed(&GenerationError::Transport("offline".into())));
    assert_eq!(state.toasts()[0].class(), "toast toast--warning");
    assert_eq!(state.toasts()[1].class(), "toast toast--error");
}
