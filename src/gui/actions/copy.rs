// src/gui/actions/copy.rs
use eframe::egui;

use crate::{config::consts::MSG_COPIED, csv, error::ConvertError, gui::app::App};

/// Put one table on the clipboard as tab-separated text.
pub fn copy(app: &mut App, ui_ctx: &egui::Context, ei: usize, ti: usize) {
    let Some(table) = super::table_at(app, ei, ti) else {
        logd!("Copy: Clicked, but table {}/{} is gone", ei, ti);
        return;
    };

    match csv::table_to_string(table, '\t') {
        Ok(txt) => {
            logf!("Copy: {} rows={}", table.title, table.nrows());
            ui_ctx.copy_text(txt);
            app.status(MSG_COPIED);
            app.alert(MSG_COPIED);
        }
        Err(e) => {
            let err = ConvertError::Copy(e.to_string());
            loge!("Copy: {}", err);
            app.alert(err.to_string());
        }
    }
}
