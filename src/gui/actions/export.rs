// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Write one table into the export directory.
pub fn export(app: &mut App, ei: usize, ti: usize) {
    // normalize the directory field first (mutates app) before any &app borrows
    app.state.options.export.set_dir(&app.state.gui.out_dir_text);

    let status_msg = match super::table_at(app, ei, ti) {
        None => {
            logd!("Export: Clicked, but table {}/{} is gone", ei, ti);
            s!("Nothing to export")
        }
        Some(table) => {
            logf!("Export: Begin {} rows={}", table.title, table.nrows());
            match file::export_table(&app.state.options.export, table) {
                Ok(path) => {
                    logf!("Export: OK → {}", path.display());
                    format!("Exported {}", path.display())
                }
                Err(e) => {
                    loge!("Export: {}", e);
                    e.to_string()
                }
            }
        }
    };

    // mutate app only after the report borrow is gone
    app.status(status_msg);
}
