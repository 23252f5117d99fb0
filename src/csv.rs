// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::table::TableModel;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Quote one field if it needs it: `He said "hi", ok` → `"He said ""hi"", ok"`.
pub fn quote_field(cell: &str, sep: char) -> String {
    if needs_quotes(cell, sep) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        s!(cell)
    }
}

/// Write a single CSV/TSV row (no line terminator) to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        write!(w, "{}", quote_field(cell.trim(), sep))?;
    }
    Ok(())
}

/// Write a whole table: header, rows, totals; `\n` between lines, none after
/// the last.
pub fn write_table<W: Write>(mut w: W, table: &TableModel, sep: char) -> io::Result<()> {
    for (i, row) in table.all_rows().enumerate() {
        if i > 0 { writeln!(w)?; }
        write_row(&mut w, row, sep)?;
    }
    Ok(())
}

/// Text used by both Copy (tab) and Export (comma or tab).
pub fn table_to_string(table: &TableModel, sep: char) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, table, sep)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
