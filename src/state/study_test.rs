use super::*;

fn loaded(total: u32) -> StudySession {
    let mut session = StudySession::new(3);
    assert!(session.page_loaded(1, total));
    session
}

// =============================================================================
// paging
// =============================================================================

#[test]
fn new_session_starts_on_first_page() {
    let session = StudySession::new(3);
    assert_eq!(session.current_page, 1);
    assert_eq!(session.total_pages, None);
    assert_eq!(session.countdown, COMPLETION_COUNTDOWN_SECS);
    assert!(!session.completed);
}

#[test]
fn next_before_first_load_is_ignored() {
    let mut session = StudySession::new(3);
    assert_eq!(session.next(), StudyStep::Ignored);
    assert_eq!(session.current_page, 1);
    assert!(!session.completed);
}

#[test]
fn next_advances_then_completes_on_last_page() {
    let mut session = loaded(2);
    assert_eq!(session.next(), StudyStep::Advanced);
    assert_eq!(session.current_page, 2);
    assert_eq!(session.next(), StudyStep::Completed);
    assert!(session.completed);
    assert_eq!(session.next(), StudyStep::Ignored);
}

#[test]
fn single_page_lesson_completes_immediately() {
    let mut session = loaded(1);
    assert_eq!(session.next(), StudyStep::Completed);
}

#[test]
fn previous_stops_at_first_page() {
    let mut session = loaded(3);
    assert!(!session.previous());
    session.next();
    assert!(session.previous());
    assert_eq!(session.current_page, 1);
}

#[test]
fn stale_page_response_is_ignored() {
    let mut session = loaded(4);
    session.next();
    assert!(!session.page_loaded(1, 9));
    assert_eq!(session.total_pages, Some(4));
    assert!(session.page_loaded(2, 4));
}

#[test]
fn progress_tracks_page_over_total() {
    let mut session = loaded(4);
    assert!((session.progress_percent() - 25.0).abs() < f64::EPSILON);
    session.next();
    assert!((session.progress_percent() - 50.0).abs() < f64::EPSILON);
    assert!(StudySession::new(1).progress_percent().abs() < f64::EPSILON);
}

// =============================================================================
// completion countdown
// =============================================================================

#[test]
fn countdown_redirects_after_five_ticks() {
    let mut session = loaded(1);
    session.next();
    for _ in 0..4 {
        assert!(!session.tick());
    }
    assert!(session.tick());
    assert!(session.should_redirect());
}

#[test]
fn tick_does_nothing_before_completion() {
    let mut session = loaded(2);
    assert!(!session.tick());
    assert_eq!(session.countdown, COMPLETION_COUNTDOWN_SECS);
}

#[test]
fn skip_countdown_redirects_now() {
    let mut session = loaded(1);
    session.skip_countdown();
    assert!(!session.should_redirect());
    session.next();
    session.skip_countdown();
    assert!(session.should_redirect());
}

#[test]
fn completing_a_lesson_plays_both_cues() {
    let mut session = loaded(2);
    assert_eq!(session.next().cues(), &[Cue::Correct]);
    assert_eq!(session.next().cues(), &[Cue::Correct, Cue::LessonComplete]);
    assert!(session.next().cues().is_empty());
}
