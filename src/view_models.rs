// src/view_models.rs

/// One option of the current question, ready to render as a toggle button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub idx: usize,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressInfo {
    pub current_1based: usize, // 1..=total
    pub total: usize,
    pub percent: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryInfo {
    pub score: usize,
    pub total: usize,
}

impl ProgressInfo {
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.current_1based, self.total)
    }
}

impl SummaryInfo {
    pub fn label(&self) -> String {
        format!("You scored {} out of {}", self.score, self.total)
    }
}
