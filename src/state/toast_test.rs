use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(Toast::success("saved"));
    let b = state.push(Toast::error("failed"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn keyed_toast_replaces_previous_with_same_key() {
    let mut state = ToastState::default();
    state.push(Toast::loading("Logging in...").keyed("login"));
    state.push(Toast::success("unrelated"));
    state.push(Toast::error("Login failed").keyed("login"));

    let login: Vec<_> = state.items.iter().filter(|e| e.toast.key == Some("login")).collect();
    assert_eq!(login.len(), 1);
    assert_eq!(login[0].toast.kind, ToastKind::Error);
    assert_eq!(login[0].toast.message, "Login failed");
    assert_eq!(state.items.len(), 2);
}

#[test]
fn unkeyed_toasts_accumulate() {
    let mut state = ToastState::default();
    state.push(Toast::success("one"));
    state.push(Toast::success("two"));
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = ToastState::default();
    let a = state.push(Toast::success("one"));
    let b = state.push(Toast::success("two"));
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn signal_sink_records_shown_toast() {
    let toasts = RwSignal::new(ToastState::default());
    toasts.show(Toast::error("Select a lesson"));
    toasts.show(Toast::loading("Saving...").keyed("save"));

    let messages: Vec<String> = toasts.with_untracked(|s| s.items.iter().map(|e| e.toast.message.clone()).collect());
    assert_eq!(messages, vec!["Select a lesson".to_owned(), "Saving...".to_owned()]);
}
