// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy, export, convert, …}.

mod convert; // src/gui/actions/convert.rs
mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod select;  // src/gui/actions/select.rs

pub use convert::convert;
pub use copy::copy;
pub use export::export;
pub use select::{add_path, clear, take_dropped};

use crate::{convert::ReportEntry, gui::app::App, table::TableModel};

/// Table `ti` of report entry `ei`, if both still exist.
#[inline]
pub(super) fn table_at(app: &App, ei: usize, ti: usize) -> Option<&TableModel> {
    match app.report.as_ref()?.entries.get(ei)? {
        ReportEntry::Game { tables, .. } => tables.get(ti),
        ReportEntry::Failed { .. } => None,
    }
}
