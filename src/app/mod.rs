use crate::data::read_questions_embedded;
use crate::model::{AppState, Question, Session};

// Submodules
pub mod actions;
pub mod queries;
pub mod view_models;

// View-model re-exports
pub use crate::view_models::{OptionRow, ProgressInfo, SummaryInfo};

pub struct QuizApp {
    /// The question bank, loaded once and never mutated.
    pub questions: Vec<Question>,
    pub session: Session,
    pub state: AppState,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_questions(read_questions_embedded())
    }

    /// Builds an app over an arbitrary bank. An empty bank goes straight to
    /// the empty state and stays there.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let state = if questions.is_empty() {
            AppState::Empty
        } else {
            AppState::Quiz
        };
        Self {
            questions,
            session: Session::new(),
            state,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
