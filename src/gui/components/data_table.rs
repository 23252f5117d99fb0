// src/gui/components/data_table.rs
//
// Draws one TableModel. Purely a view.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::TableModel;

const ROW_H: f32 = 20.0;

fn numeric_col(ci: usize, name_cols: usize) -> bool {
    ci >= name_cols
}

pub fn draw(ui: &mut egui::Ui, table: &TableModel, salt: (usize, usize)) {
    let (r, g, b) = table.team.rgb();
    let tint = Color32::from_rgb(r, g, b);
    let cols = table.ncols();
    // Name (+ Pos for skaters) left-aligned, stats centered
    let name_cols = if cols > 5 { 2 } else { 1 };

    let cell = |ui: &mut egui::Ui, ci: usize, text: RichText| {
        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
        if numeric_col(ci, name_cols) {
            ui.centered_and_justified(|ui| { ui.label(text); });
        } else {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
        }
    };

    let mut builder = TableBuilder::new(ui)
        .id_salt(("game_table", salt))
        .striped(true)
        .vscroll(false);
    for ci in 0..cols {
        let w = if ci == 0 { 150.0 } else { 48.0 };
        builder = builder.column(Column::initial(w).at_least(30.0).resizable(true).clip(true));
    }

    builder
        .header(ROW_H + 4.0, |mut header| {
            for (ci, h) in table.headers.iter().enumerate() {
                header.col(|ui| cell(ui, ci, RichText::new(h).strong().color(tint)));
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(ROW_H, |mut tr| {
                    for (ci, c) in row.iter().enumerate() {
                        tr.col(|ui| cell(ui, ci, RichText::new(c)));
                    }
                });
            }
            if let Some(totals) = &table.totals {
                body.row(ROW_H, |mut tr| {
                    for (ci, c) in totals.iter().enumerate() {
                        tr.col(|ui| cell(ui, ci, RichText::new(c).strong()));
                    }
                });
            }
        });
}
