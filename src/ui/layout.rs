use egui::{CentralPanel, Color32, Context, Frame, TopBottomPanel, Ui};

/// Scrolling banner across the top, the egui stand-in for the original
/// marquee. Repaints continuously while visible.
pub fn marquee_panel(ctx: &Context, text: &str) {
    TopBottomPanel::top("marquee_panel")
        .exact_height(36.0)
        .frame(Frame::default().fill(Color32::from_rgb(22, 163, 74)))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let font_id = egui::TextStyle::Heading.resolve(ui.style());
            let galley = ui
                .painter()
                .layout_no_wrap(text.to_owned(), font_id, Color32::WHITE);

            // One full pass moves the text from off-screen right to off-screen left.
            let span = rect.width() + galley.size().x;
            let speed = 90.0; // points per second
            let t = ui.input(|i| i.time) as f32;
            let offset = (t * speed) % span;

            let pos = egui::pos2(rect.right() - offset, rect.center().y - galley.size().y / 2.0);
            ui.painter().galley(pos, galley, Color32::WHITE);
            ui.ctx().request_repaint();
        });
}

/// Panel centered both vertically and horizontally, with a maximum content
/// width and an inner content block.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Vertical space to center the content
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}
