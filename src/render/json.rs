// src/render/json.rs
use std::io;

use super::Render;
use crate::convert::ReportEntry as Entry;
use crate::table::TableModel;

/// Pretty JSON array, one object per selected file.
#[derive(Default)]
pub struct JsonRender {
    entries: Vec<Entry>,
}

impl Render for JsonRender {
    fn begin_game(&mut self, number: u32, source: &str) {
        self.entries.push(Entry::Game { number, source: s!(source), tables: Vec::new() });
    }

    fn table(&mut self, table: &TableModel) {
        if let Some(Entry::Game { tables, .. }) = self.entries.last_mut() {
            tables.push(table.clone());
        }
    }

    fn error(&mut self, source: &str, message: &str) {
        self.entries.push(Entry::Failed { source: s!(source), message: s!(message) });
    }

    fn finish(&mut self) -> io::Result<String> {
        let entries = std::mem::take(&mut self.entries);
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}
