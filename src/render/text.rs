// src/render/text.rs
//
// Plain terminal output: padded columns, one blank line between tables.

use std::io;

use super::Render;
use crate::core::sanitize::normalize_ws;
use crate::table::TableModel;

#[derive(Default)]
pub struct TextRender {
    out: String,
}

fn align(lines: &[Vec<String>]) -> Vec<String> {
    let ncols = lines.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; ncols];
    for line in lines {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(cell.chars().count());
        }
    }

    lines
        .iter()
        .map(|line| {
            let mut s = String::new();
            for (i, cell) in line.iter().enumerate() {
                if i > 0 { s.push_str("  "); }
                s.push_str(cell);
                let pad = widths[i] - cell.chars().count();
                s.extend(std::iter::repeat_n(' ', pad));
            }
            s.trim_end().to_string()
        })
        .collect()
}

impl Render for TextRender {
    fn begin_game(&mut self, number: u32, source: &str) {
        if !self.out.is_empty() { self.out.push('\n'); }
        self.out.push_str(&format!("Game {number} ({source})\n"));
    }

    fn table(&mut self, table: &TableModel) {
        // Embedded newlines would break the grid.
        let lines: Vec<Vec<String>> = table
            .all_rows()
            .map(|row| row.iter().map(|c| normalize_ws(c)).collect())
            .collect();

        self.out.push_str(&format!("\n== {} ==\n", table.title));
        for line in align(&lines) {
            self.out.push_str(&line);
            self.out.push('\n');
        }
    }

    fn error(&mut self, _source: &str, message: &str) {
        if !self.out.is_empty() { self.out.push('\n'); }
        self.out.push_str(&format!("! {message}\n"));
    }

    fn finish(&mut self) -> io::Result<String> {
        Ok(std::mem::take(&mut self.out))
    }
}
