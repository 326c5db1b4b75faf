use super::*;

impl QuizApp {
    /// Handles a click on option `idx` of the current question.
    pub fn select_option(&mut self, idx: usize) {
        if self.state != AppState::Quiz {
            return;
        }
        // Borrow only the bank so the session field stays assignable.
        let Some(question) = self.questions.get(self.session.current) else {
            return;
        };
        self.session = self.session.select_option(question, idx);
    }

    /// Handles the Next/Finish button: moves to the next question, or to the
    /// summary when the last question was showing.
    pub fn advance(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        self.session = self.session.advance(self.total());
        if self.session.finished {
            self.state = AppState::Summary;
        }
    }
}
