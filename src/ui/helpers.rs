// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui};

/// One option toggle. The only state it carries is whether it is the
/// current selection, shown as a filled button.
pub fn option_button(ui: &mut Ui, label: &str, selected: bool, width: f32) -> bool {
    let button = if selected {
        Button::new(RichText::new(label).color(Color32::WHITE))
            .fill(Color32::from_rgb(59, 130, 246))
    } else {
        Button::new(label)
    };
    ui.add_sized([width, 36.0], button).clicked()
}

/// The Next/Finish button.
pub fn primary_button(ui: &mut Ui, label: &str, width: f32) -> bool {
    ui.add_sized([width, 40.0], Button::new(label)).clicked()
}
