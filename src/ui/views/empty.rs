use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

/// Terminal warning shown when the question bank is missing or empty.
/// No controls: there is nothing to interact with.
pub fn ui_empty(_app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 120.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("⚠ No questions found. Please check the question bank.")
                    .heading()
                    .color(Color32::RED),
            );
        });
    });
}
