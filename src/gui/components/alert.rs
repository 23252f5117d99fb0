// src/gui/components/alert.rs
use eframe::egui;

use crate::gui::app::App;

/// Small centered window for prompts; closes on OK.
pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.alert.clone() else { return };

    let mut close = false;
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(msg);
            ui.add_space(4.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        app.alert = None;
    }
}
