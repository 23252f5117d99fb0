// src/render/html.rs
//
// Standalone HTML page. Every cell goes through escape_html, names and
// positions included.

use std::fmt::Write as _;
use std::io;

use super::Render;
use crate::core::escape::escape_html;
use crate::table::TableModel;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 1.5em; }
table { border-collapse: collapse; margin-bottom: 1em; }
th, td { border: 1px solid #ccc; padding: 2px 8px; }
table.blue th { background: #dbe6fd; }
table.red th { background: #fbdada; }
tr.totals td { font-weight: bold; }
";

#[derive(Default)]
pub struct HtmlRender {
    body: String,
}

fn push_cells(out: &mut String, tag: &str, cells: &[String]) {
    for c in cells {
        let _ = write!(out, "<{tag}>{}</{tag}>", escape_html(c));
    }
}

impl Render for HtmlRender {
    fn begin_game(&mut self, number: u32, _source: &str) {
        let _ = writeln!(self.body, "<h2>Game {number}</h2>");
    }

    fn table(&mut self, table: &TableModel) {
        let b = &mut self.body;
        let _ = writeln!(b, "<h3>{}</h3>", escape_html(&table.title));
        let _ = writeln!(b, "<table class=\"{}\">", table.team.css_class());

        b.push_str("<tr>");
        push_cells(b, "th", &table.headers);
        b.push_str("</tr>\n");

        for row in &table.rows {
            b.push_str("<tr>");
            push_cells(b, "td", row);
            b.push_str("</tr>\n");
        }
        if let Some(totals) = &table.totals {
            b.push_str("<tr class=\"totals\">");
            push_cells(b, "td", totals);
            b.push_str("</tr>\n");
        }
        b.push_str("</table>\n");
    }

    fn error(&mut self, _source: &str, message: &str) {
        let _ = writeln!(
            self.body,
            "<div class=\"error\" style=\"color: crimson;\">{}</div>",
            escape_html(message)
        );
    }

    fn finish(&mut self) -> io::Result<String> {
        let body = std::mem::take(&mut self.body);
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Game stats</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Report;
    use crate::render::render_report;
    use crate::table::TableKind;
    use crate::teams::Team;

    fn table() -> TableModel {
        TableModel {
            title: s!("Red Skaters"),
            team: Team::Red,
            kind: TableKind::Skaters,
            headers: cells!["Name", "Pos"],
            rows: vec![cells!["<script>alert(1)</script>", "C"]],
            totals: Some(cells!["TEAM TOTALS", ""]),
        }
    }

    #[test]
    fn cells_are_escaped() {
        let mut r = HtmlRender::default();
        r.table(&table());
        let out = r.finish().unwrap();
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!out.contains("<script>"));
        assert!(out.contains("<table class=\"red\">"));
        assert!(out.contains("<tr class=\"totals\"><td>TEAM TOTALS</td><td></td></tr>"));
    }

    #[test]
    fn games_and_errors_in_order() {
        let report = Report::from_outcomes(vec![
            (s!("a.json"), Ok(vec![table()])),
            (s!("b.json"), Err(crate::error::ConvertError::Parse {
                name: s!("b.json"),
                source: crate::error::GameParseError::NullRoot,
            })),
        ]);
        let out = render_report(&report, &mut HtmlRender::default()).unwrap();
        let game = out.find("<h2>Game 1</h2>").unwrap();
        let err = out.find("color: crimson").unwrap();
        assert!(game < err);
        assert!(out.contains("Error parsing b.json: cannot read &quot;players&quot; of null"));
    }
}
