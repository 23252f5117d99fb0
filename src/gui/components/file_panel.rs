// src/gui/components/file_panel.rs
//
// Left panel: current selection, add-by-path, Convert/Clear, export settings
// and the status line.

use eframe::egui;

use crate::{
    config::{consts::MAX_FILES, options::ExportFormat},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Game files");

    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let hint = format!("Drop up to {MAX_FILES} .json files anywhere");
    if hovering {
        ui.label(egui::RichText::new(hint).strong());
    } else {
        ui.weak(hint);
    }

    ui.separator();

    if app.selection.is_empty() {
        ui.weak("No files selected");
    } else {
        for (i, src) in app.selection.iter().enumerate() {
            let label = ui.label(format!("{}. {}", i + 1, src.name()));
            if let Some(path) = src.path() {
                label.on_hover_text(path.display().to_string());
            }
        }
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.path_text)
                .hint_text("path/to/game.json")
                .desired_width(180.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("Add").clicked() || enter) && !app.running {
            actions::add_path(app);
        }
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let convert = ui.add_enabled(!app.running, egui::Button::new("Convert"));
        if convert.clicked() {
            actions::convert(app, ui.ctx());
        }
        if ui.add_enabled(!app.running, egui::Button::new("Clear")).clicked() {
            actions::clear(app);
        }
        if app.running {
            ui.spinner();
        }
    });

    ui.separator();
    ui.label("Export");

    let export = &mut app.state.options.export;
    let before = export.format;
    ui.horizontal(|ui| {
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
    });
    if export.format != before {
        logf!("UI: Export format → {:?}", export.format);
    }

    ui.horizontal(|ui| {
        ui.label("Folder:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            logd!("UI: out_dir_text changed → {}", app.state.gui.out_dir_text);
        }
    });

    ui.separator();
    ui.label(app.status_text());
}
