//! Lesson study session: one vocabulary item per page, then a countdown back
//! to the lesson list.
//!
//! DESIGN
//! ======
//! Pure state; the page owns the fetch and the one-second timer and feeds
//! results in. A page response is applied only if it matches the page the
//! learner is currently on, so a slow response for a page already left is
//! ignored.

#[cfg(test)]
#[path = "study_test.rs"]
mod study_test;

use crate::util::browser::Cue;

/// Items requested per page.
pub const STUDY_PAGE_SIZE: u32 = 1;
/// Seconds between completing a lesson and returning to the lesson list.
pub const COMPLETION_COUNTDOWN_SECS: u32 = 5;

/// Result of pressing "next".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyStep {
    Advanced,
    Completed,
    /// Nothing loaded yet, or already completed.
    Ignored,
}

impl StudyStep {
    /// Sounds to play for this step.
    #[must_use]
    pub fn cues(self) -> &'static [Cue] {
        match self {
            Self::Advanced => &[Cue::Correct],
            Self::Completed => &[Cue::Correct, Cue::LessonComplete],
            Self::Ignored => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudySession {
    pub lesson_number: u32,
    pub current_page: u32,
    /// Known once the first page has loaded.
    pub total_pages: Option<u32>,
    pub completed: bool,
    pub countdown: u32,
}

impl StudySession {
    #[must_use]
    pub fn new(lesson_number: u32) -> Self {
        Self { lesson_number, current_page: 1, total_pages: None, completed: false, countdown: COMPLETION_COUNTDOWN_SECS }
    }

    /// Record a loaded page. Returns false for a stale page.
    pub fn page_loaded(&mut self, page: u32, total_pages: u32) -> bool {
        if page != self.current_page {
            return false;
        }
        self.total_pages = Some(total_pages);
        true
    }

    pub fn next(&mut self) -> StudyStep {
        if self.completed {
            return StudyStep::Ignored;
        }
        let Some(total) = self.total_pages else {
            return StudyStep::Ignored;
        };
        if self.current_page < total {
            self.current_page += 1;
            StudyStep::Advanced
        } else {
            self.completed = true;
            StudyStep::Completed
        }
    }

    /// Go back one page. Returns false on the first page or after completion.
    pub fn previous(&mut self) -> bool {
        if self.completed || self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Completion through the lesson, 0..=100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        match self.total_pages {
            Some(total) if total > 0 => (f64::from(self.current_page) / f64::from(total) * 100.0).min(100.0),
            _ => 0.0,
        }
    }

    /// Advance the completion countdown by one second. Returns true when the
    /// view should leave.
    pub fn tick(&mut self) -> bool {
        if self.completed {
            self.countdown = self.countdown.saturating_sub(1);
        }
        self.should_redirect()
    }

    /// "Return now".
    pub fn skip_countdown(&mut self) {
        if self.completed {
            self.countdown = 0;
        }
    }

    #[must_use]
    pub fn should_redirect(&self) -> bool {
        self.completed && self.countdown == 0
    }
}
