pub mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::marquee_panel;

const BANNER_TEXT: &str = "🥳🎆🎈 HAPPY INDEPENDENCE NIGERIA 🎇🎈🥳";

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Decorative banner, everywhere except the empty-bank warning
        if !matches!(self.state, AppState::Empty) {
            marquee_panel(ctx, BANNER_TEXT);
        }

        // Dispatch by state to the view functions
        match self.state {
            AppState::Empty => views::empty::ui_empty(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }
    }
}
