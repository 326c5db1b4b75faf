use super::*;

impl QuizApp {
    /// Rows for the option buttons of the current question. Empty when the
    /// record carries no options; the view shows a notice instead.
    pub fn option_rows(&self) -> Vec<OptionRow> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };
        question
            .options
            .iter()
            .enumerate()
            .map(|(idx, text)| OptionRow {
                idx,
                text: text.clone(),
                selected: self.session.selected == Some(idx),
            })
            .collect()
    }

    pub fn progress_info(&self) -> ProgressInfo {
        ProgressInfo {
            current_1based: self.session.current + 1,
            total: self.total(),
            percent: self.session.progress_percent(self.total()),
        }
    }

    pub fn summary_info(&self) -> SummaryInfo {
        SummaryInfo {
            score: self.session.score,
            total: self.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn q(options: &[&str], answer: Option<usize>) -> Question {
        Question {
            question: "Q?".to_owned(),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer,
        }
    }

    #[test]
    fn option_rows_mirror_the_selection() {
        let mut app = QuizApp::with_questions(vec![q(&["a", "b", "c"], Some(2))]);
        assert!(app.option_rows().iter().all(|r| !r.selected));

        app.select_option(1);
        let rows = app.option_rows();
        assert_eq!(rows.len(), 3);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
        assert!(!rows[2].selected);
        assert_eq!(rows[2].text, "c");
    }

    #[test]
    fn progress_info_tracks_the_cursor() {
        let mut app = QuizApp::with_questions(vec![q(&["a"], Some(0)), q(&["a"], Some(0))]);
        let info = app.progress_info();
        assert_eq!(info.current_1based, 1);
        assert_eq!(info.total, 2);
        assert_eq!(info.percent, 50.0);
        assert_eq!(info.label(), "Question 1 of 2");

        app.advance();
        assert_eq!(app.progress_info().percent, 100.0);
    }
}
