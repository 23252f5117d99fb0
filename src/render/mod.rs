// src/render/mod.rs
//
// Display collaborators for a finished Report. The report is fully built
// before any of these run; each one only decides how it looks.

mod html;
mod json;
mod text;

use std::io;

pub use html::HtmlRender;
pub use json::JsonRender;
pub use text::TextRender;

use crate::config::options::OutputFormat;
use crate::convert::{Report, ReportEntry};
use crate::table::TableModel;

pub trait Render {
    /// Start of one successful file, numbered from 1.
    fn begin_game(&mut self, number: u32, source: &str);

    fn table(&mut self, table: &TableModel);

    /// A per-file failure, at that file's position.
    fn error(&mut self, source: &str, message: &str);

    fn finish(&mut self) -> io::Result<String>;
}

/// Walk a report in order, feeding one renderer.
pub fn render_report(report: &Report, out: &mut dyn Render) -> io::Result<String> {
    for entry in &report.entries {
        match entry {
            ReportEntry::Game { number, source, tables } => {
                out.begin_game(*number, source);
                for t in tables {
                    out.table(t);
                }
            }
            ReportEntry::Failed { source, message } => out.error(source, message),
        }
    }
    out.finish()
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn Render> {
    match format {
        OutputFormat::Text => Box::new(TextRender::default()),
        OutputFormat::Html => Box::new(HtmlRender::default()),
        OutputFormat::Json => Box::new(JsonRender::default()),
    }
}

pub fn render(report: &Report, format: OutputFormat) -> io::Result<String> {
    let mut r = renderer_for(format);
    render_report(report, r.as_mut())
}
