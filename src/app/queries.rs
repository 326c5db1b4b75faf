use super::*;

impl QuizApp {
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The question the session is positioned on. `None` only when the bank
    /// is empty or the index somehow points past the end; callers fall back
    /// to a placeholder label in that case.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.session.current)
    }

    pub fn on_last_question(&self) -> bool {
        self.session.is_last(self.total())
    }

    /// Label for the primary button: "Next" until the last question,
    /// "Finish" on it.
    pub fn primary_button_label(&self) -> &'static str {
        if self.on_last_question() { "Finish" } else { "Next" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn bank(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                question: format!("Q{}?", i + 1),
                options: vec!["a".to_owned(), "b".to_owned()],
                answer: Some(0),
            })
            .collect()
    }

    #[test]
    fn primary_button_switches_to_finish_on_last_question() {
        let mut app = QuizApp::with_questions(bank(2));
        assert_eq!(app.primary_button_label(), "Next");
        app.advance();
        assert_eq!(app.primary_button_label(), "Finish");
    }

    #[test]
    fn current_question_is_none_on_empty_bank() {
        let app = QuizApp::with_questions(vec![]);
        assert!(app.current_question().is_none());
        assert!(!app.on_last_question());
    }
}
