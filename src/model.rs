use serde::{Deserialize, Serialize};

/// A single multiple-choice question, already normalized by the loader:
/// if `answer` is `Some(a)` then `a` is a valid index into `options`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    /// `None` means the record carried no usable answer index; the question
    /// renders normally but can never be judged correct.
    pub answer: Option<usize>,
}

impl Question {
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Empty,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Quiz
    }
}

/// Snapshot of where the user is in the quiz. Transitions return a new
/// snapshot instead of mutating in place, so they can be tested without
/// any rendering surface.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub current: usize,
    pub score: usize,
    pub selected: Option<usize>,
    /// Whether the current question already produced its score increment.
    /// Re-clicking the correct option must not count twice.
    pub scored_current: bool,
    pub finished: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a click on option `idx` of the current question.
    ///
    /// No-op once finished or when the question has no options. An
    /// out-of-range `idx` is not an error: it is recorded as the selection
    /// and simply never matches the answer.
    #[must_use]
    pub fn select_option(self, question: &Question, idx: usize) -> Self {
        if self.finished || !question.has_options() {
            return self;
        }

        let mut next = self;
        next.selected = Some(idx);

        if question.answer == Some(idx) && !self.scored_current {
            next.score += 1;
            next.scored_current = true;
        }

        next
    }

    /// Moves to the next question, or finishes when already on the last one.
    /// `total` is the question-bank length; an empty bank never advances.
    #[must_use]
    pub fn advance(self, total: usize) -> Self {
        if self.finished || total == 0 {
            return self;
        }

        let mut next = self;
        if self.current + 1 < total {
            next.current += 1;
            next.selected = None;
            next.scored_current = false;
        } else {
            next.finished = true;
        }
        next
    }

    pub fn is_last(&self, total: usize) -> bool {
        total > 0 && self.current + 1 == total
    }

    /// Progress through the bank as a percentage, `(current + 1) / total * 100`.
    pub fn progress_percent(&self, total: usize) -> f32 {
        if total == 0 {
            0.0
        } else {
            (self.current as f32 + 1.0) / total as f32 * 100.0
        }
    }
}
