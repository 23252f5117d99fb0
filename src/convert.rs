// src/convert.rs
//
// One conversion run: up to MAX_FILES sources, each read + parsed + built on
// its own worker thread. Every task is handed its selection slot up front and
// results are put back in slot order before game numbers are given out, so
// output order never depends on which read finishes first.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{mpsc, Arc},
    thread,
};

use serde::Serialize;

use crate::{
    config::consts::MAX_FILES,
    error::ConvertError,
    player::parse_game,
    progress::Progress,
    table::{self, TableModel},
};

/* ---------------- Sources & selection ---------------- */

#[derive(Clone, Debug)]
enum SourceData {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

/// A file picked for conversion: a path on disk or bytes handed over by a drop.
#[derive(Clone, Debug)]
pub struct Source {
    name: String,
    data: SourceData,
}

impl Source {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, data: SourceData::Path(path) }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { name: name.into(), data: SourceData::Bytes(bytes.into()) }
    }

    /// Display name (file name, not full path).
    pub fn name(&self) -> &str { &self.name }

    pub fn path(&self) -> Option<&Path> {
        match &self.data {
            SourceData::Path(p) => Some(p),
            SourceData::Bytes(_) => None,
        }
    }

    /// Read the whole source as text. Invalid UTF-8 is replaced, not rejected.
    pub fn read_text(&self) -> io::Result<String> {
        let bytes = match &self.data {
            SourceData::Path(p) => fs::read(p)?,
            SourceData::Bytes(b) => b.to_vec(),
        };
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        })
    }
}

/// Keep the first MAX_FILES in selection order.
pub fn select(mut sources: Vec<Source>) -> Vec<Source> {
    if sources.len() > MAX_FILES {
        logd!("Select: keeping {} of {} files", MAX_FILES, sources.len());
        sources.truncate(MAX_FILES);
    }
    sources
}

/// A file offered by drag and drop.
#[derive(Clone, Debug)]
pub struct Dropped {
    pub name: String,
    /// MIME type as reported by the platform; often empty.
    pub mime: String,
    pub source: Source,
}

impl Dropped {
    /// Untyped files are let through as well as anything named `*.json`.
    pub fn looks_like_json(&self) -> bool {
        self.mime.is_empty() || self.name.ends_with(".json")
    }
}

/// Filter a drop down to JSON candidates and truncate. Errs when nothing is
/// left; callers keep their current selection in that case.
pub fn accept_dropped(items: Vec<Dropped>) -> Result<Vec<Source>, ConvertError> {
    let total = items.len();
    let accepted: Vec<Source> = items
        .into_iter()
        .filter(Dropped::looks_like_json)
        .map(|d| d.source)
        .collect();

    if accepted.is_empty() {
        logd!("Drop: rejected {} file(s), none look like JSON", total);
        return Err(ConvertError::NoJsonDropped);
    }
    Ok(select(accepted))
}

/* ---------------- Report ---------------- */

/// What one selected file turned into.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReportEntry {
    Game {
        number: u32,
        source: String,
        tables: Vec<TableModel>,
    },
    Failed {
        source: String,
        message: String,
    },
}

/// Result of one conversion, entries in selection order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn games(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, ReportEntry::Game { .. })).count()
    }

    pub fn failures(&self) -> usize {
        self.entries.len() - self.games()
    }

    /// Every table of every game, in display order.
    pub fn tables(&self) -> impl Iterator<Item = (u32, &TableModel)> {
        self.entries.iter().flat_map(|e| match e {
            ReportEntry::Game { number, tables, .. } => tables.iter().map(|t| (*number, t)).collect::<Vec<_>>(),
            ReportEntry::Failed { .. } => Vec::new(),
        })
    }

    /// Number successful outcomes 1, 2, … in the order given; failures keep
    /// their position but take no number.
    pub fn from_outcomes(outcomes: Vec<(String, Result<Vec<TableModel>, ConvertError>)>) -> Self {
        let mut next_game = 1u32;
        let entries = outcomes
            .into_iter()
            .map(|(source, res)| match res {
                Ok(tables) => {
                    let number = next_game;
                    next_game += 1;
                    ReportEntry::Game { number, source, tables }
                }
                Err(e) => ReportEntry::Failed { source, message: e.to_string() },
            })
            .collect();
        Self { entries }
    }
}

/* ---------------- Conversion ---------------- */

/// Parse one file's text and build its tables.
pub fn convert_text(name: &str, text: &str) -> Result<Vec<TableModel>, ConvertError> {
    let game = parse_game(text).map_err(|source| ConvertError::Parse { name: s!(name), source })?;
    Ok(table::game_tables(&game.players))
}

/// Read, parse and build one source.
pub fn convert_source(source: &Source) -> Result<Vec<TableModel>, ConvertError> {
    let text = source
        .read_text()
        .map_err(|e| ConvertError::Read { name: s!(source.name()), source: e })?;
    convert_text(source.name(), &text)
}

/// Convert up to MAX_FILES sources concurrently and return the report in
/// selection order.
pub fn convert(
    sources: &[Source],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report, ConvertError> {
    if sources.is_empty() {
        return Err(ConvertError::NoFiles);
    }
    let picked = &sources[..sources.len().min(MAX_FILES)];

    if let Some(p) = progress.as_deref_mut() {
        p.begin(picked.len());
        if sources.len() > picked.len() {
            p.log(&format!("Only the first {} of {} files are converted", picked.len(), sources.len()));
        }
    }
    logf!("Convert: Begin files={}", picked.len());

    type Outcome = (usize, Result<Vec<TableModel>, ConvertError>);
    let (tx, rx) = mpsc::channel::<Outcome>();

    for (slot, source) in picked.iter().enumerate() {
        let source = source.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            let _ = tx.send((slot, convert_source(&source)));
        });
    }
    drop(tx); // main thread is sole receiver now

    let mut slots: Vec<Option<Result<Vec<TableModel>, ConvertError>>> =
        picked.iter().map(|_| None).collect();

    for (slot, res) in rx {
        let name = picked[slot].name();
        match &res {
            Ok(tables) => {
                logd!("Convert: slot {} ({}) → {} table(s)", slot, name, tables.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(slot, name);
                }
            }
            Err(e) => {
                loge!("Convert: {}", e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(slot, name, &e.to_string());
                }
            }
        }
        slots[slot] = Some(res);
    }

    let outcomes = picked
        .iter()
        .zip(slots)
        .map(|(src, res)| {
            let res = res.unwrap_or_else(|| {
                Err(ConvertError::Read {
                    name: s!(src.name()),
                    source: io::Error::other("conversion worker stopped"),
                })
            });
            (s!(src.name()), res)
        })
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let report = Report::from_outcomes(outcomes);
    logf!("Convert: OK games={} failed={}", report.games(), report.failures());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(name: &str, text: &str) -> Source {
        Source::from_bytes(name, text.as_bytes())
    }

    #[test]
    fn select_truncates_to_three() {
        let picked = select((1..=5).map(|i| bytes(&format!("g{i}.json"), "{}")).collect());
        let names: Vec<_> = picked.iter().map(Source::name).collect();
        assert_eq!(names, ["g1.json", "g2.json", "g3.json"]);
    }

    #[test]
    fn drop_filter() {
        let item = |name: &str, mime: &str| Dropped {
            name: s!(name),
            mime: s!(mime),
            source: bytes(name, "{}"),
        };
        let ok = accept_dropped(vec![
            item("a.json", "application/json"),
            item("notes.txt", "text/plain"),
            item("raw", ""),
        ])
        .unwrap();
        let names: Vec<_> = ok.iter().map(Source::name).collect();
        assert_eq!(names, ["a.json", "raw"]);

        let err = accept_dropped(vec![item("pic.png", "image/png")]).unwrap_err();
        assert!(matches!(err, ConvertError::NoJsonDropped));
    }

    #[test]
    fn nothing_selected() {
        assert!(matches!(convert(&[], None), Err(ConvertError::NoFiles)));
    }

    #[test]
    fn failures_take_no_game_number() {
        let sources = vec![
            bytes("one.json", r#"{"players":[{"name":"A","team":"Blue","position":"C"}]}"#),
            bytes("two.json", "{not json"),
            bytes("three.json", r#"{"players":[]}"#),
        ];
        let report = convert(&sources, None).unwrap();
        assert_eq!(report.entries.len(), 3);
        assert!(matches!(&report.entries[0], ReportEntry::Game { number: 1, source, .. } if source == "one.json"));
        match &report.entries[1] {
            ReportEntry::Failed { source, message } => {
                assert_eq!(source, "two.json");
                assert!(message.starts_with("Error parsing two.json: "), "{message}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(matches!(&report.entries[2], ReportEntry::Game { number: 2, tables, .. } if tables.is_empty()));
        assert_eq!(report.games(), 2);
        assert_eq!(report.failures(), 1);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let report = convert(&[Source::from_path("/definitely/not/here.json")], None).unwrap();
        match &report.entries[0] {
            ReportEntry::Failed { message, .. } => assert!(message.starts_with("Error reading here.json: ")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn lossy_utf8_still_parses() {
        let src = Source::from_bytes("odd.json", b"{\"players\":[{\"name\":\"A\xff\",\"team\":\"Red\"}]}".to_vec());
        let tables = convert_source(&src).unwrap();
        assert_eq!(tables[0].rows[0][0], "A\u{fffd}");
    }
}
