use crate::QuizApp;
use crate::ui::helpers::{option_button, primary_button};
use egui::{CentralPanel, Color32, Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 320.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(40, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);

                    // Index past the end should not happen, but degrade to a
                    // placeholder rather than panic on a bad bank.
                    let title = app
                        .current_question()
                        .map(|q| q.question.clone())
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| "Question unavailable".to_owned());
                    ui.heading(title);
                    ui.add_space(16.0);

                    let rows = app.option_rows();
                    if rows.is_empty() {
                        ui.label(
                            RichText::new("No options available for this question.")
                                .color(Color32::YELLOW),
                        );
                    } else {
                        for row in &rows {
                            if option_button(ui, &row.text, row.selected, panel_width) {
                                app.select_option(row.idx);
                            }
                            ui.add_space(6.0);
                        }
                    }

                    ui.add_space(12.0);

                    let info = app.progress_info();
                    ui.add(ProgressBar::new(info.percent / 100.0));
                    ui.add_space(4.0);
                    ui.label(info.label());

                    ui.add_space(16.0);

                    if primary_button(ui, app.primary_button_label(), panel_width / 3.0) {
                        app.advance();
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
