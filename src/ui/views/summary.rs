use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

/// Final screen: score out of total, no further controls.
pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    let info = app.summary_info();

    centered_panel(ctx, 180.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎉 Quiz Completed!");
            ui.add_space(12.0);
            ui.label(RichText::new(info.label()).heading());
        });
    });
}
