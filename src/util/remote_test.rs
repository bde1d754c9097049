use super::*;
use crate::state::toast::ToastKind;

#[test]
fn only_latest_ticket_is_current() {
    let mut seq = RequestSeq::default();
    let first = seq.issue();
    let second = seq.issue();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

#[test]
fn fresh_seq_has_no_current_ticket() {
    let seq = RequestSeq::default();
    assert!(!seq.is_current(1));
}

#[test]
fn mutation_toast_success() {
    let toast = mutation_toast::<()>(&Ok(()), "Lesson added", "Failed to add lesson");
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Lesson added");
}

#[test]
fn mutation_toast_prefers_server_error_text() {
    let err = ApiError::Response { status: 409, message: Some("Lesson number already exists".into()) };
    let toast = mutation_toast::<()>(&Err(err), "Lesson added", "Failed to add lesson");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Lesson number already exists");

    let toast = mutation_toast::<()>(&Err(ApiError::Timeout), "Lesson added", "Failed to add lesson");
    assert_eq!(toast.message, "Failed to add lesson");
}
