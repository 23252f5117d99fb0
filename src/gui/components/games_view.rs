// src/gui/components/games_view.rs
//
// Central panel: "Game N" sections in selection order, each table with its
// Copy/Export buttons, failures inline in crimson.

use eframe::egui::{self, Color32, RichText};

use crate::{
    convert::ReportEntry,
    gui::{actions, app::App},
};

use super::data_table;

const CRIMSON: Color32 = Color32::from_rgb(0xDC, 0x14, 0x3C);

enum Click {
    Copy(usize, usize),
    Export(usize, usize),
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(report) = app.report.as_ref() else {
        if app.running {
            ui.horizontal(|ui| { ui.spinner(); ui.label("Converting…"); });
        } else {
            ui.weak("Select or drop game files, then press Convert.");
        }
        return;
    };

    let mut click: Option<Click> = None;

    egui::ScrollArea::vertical()
        .id_salt("games_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (ei, entry) in report.entries.iter().enumerate() {
                match entry {
                    ReportEntry::Game { number, source, tables } => {
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            ui.heading(format!("Game {number}"));
                            ui.weak(source);
                        });
                        for (ti, table) in tables.iter().enumerate() {
                            ui.push_id((ei, ti), |ui| {
                                ui.add_space(4.0);
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(&table.title).strong());
                                    if ui.button("Copy table").clicked() {
                                        click = Some(Click::Copy(ei, ti));
                                    }
                                    if ui.button("Export CSV").clicked() {
                                        click = Some(Click::Export(ei, ti));
                                    }
                                });
                                data_table::draw(ui, table, (ei, ti));
                            });
                        }
                    }
                    ReportEntry::Failed { message, .. } => {
                        ui.add_space(8.0);
                        ui.label(RichText::new(message).color(CRIMSON));
                    }
                }
            }
        });

    // act after the report borrow is gone
    match click {
        Some(Click::Copy(ei, ti)) => actions::copy(app, ui.ctx(), ei, ti),
        Some(Click::Export(ei, ti)) => actions::export(app, ei, ti),
        None => {}
    }
}
