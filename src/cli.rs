// src/cli.rs
//
// Headless conversion: `cli [FILES]... [--format text|html|json] [--out PATH]
// [--csv DIR] [--tsv]`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result, WrapErr};

use crate::config::options::{AppOptions, ExportFormat, OutputFormat};
use crate::convert::{self, Source};
use crate::progress::Progress;
use crate::{file, render};

/// Turn game-stats JSON files into team tables
#[derive(Debug, Parser)]
#[command(name = "cli", version, long_about = None)]
pub struct Args {
    /// Game files; only the first three are converted
    files: Vec<PathBuf>,

    /// How the report is printed
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also export every table into DIR
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,

    /// Export tab-separated (.tsv) instead of CSV
    #[arg(long, requires = "csv")]
    tsv: bool,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions { output: self.format, ..AppOptions::default() };
        if let Some(dir) = &self.csv {
            opts.export.set_dir(&dir.to_string_lossy());
        }
        if self.tsv {
            opts.export.format = ExportFormat::Tsv;
        }
        opts
    }
}

/// Per-file lines on stderr so stdout stays clean for the report.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Converting {total} file(s)");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_failed(&mut self, _slot: usize, _name: &str, reason: &str) {
        eprintln!("{reason}");
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    if args.files.is_empty() {
        bail!("{}", crate::error::ConvertError::NoFiles);
    }
    let opts = args.options();
    // convert() keeps the first three and reports the rest through Progress::log
    let sources: Vec<Source> = args.files.iter().map(Source::from_path).collect();
    let report = convert::convert(&sources, Some(&mut StderrProgress))?;

    let text = render::render(&report, opts.output).wrap_err("rendering report")?;
    match &args.out {
        Some(path) => {
            file::write_report(path, &text)
                .wrap_err_with(|| format!("writing {}", path.display()))?;
            logf!("CLI: report → {}", path.display());
        }
        None => print!("{text}"),
    }

    if args.csv.is_some() {
        let written = file::export_tables(&opts.export, report.tables().map(|(_, t)| t))?;
        eprintln!("Exported {} file(s) to {}", written.len(), opts.export.out_dir().display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from(["cli", "a.json", "--format", "html", "--csv", "exports", "--tsv"]);
        let opts = args.options();
        assert_eq!(opts.output, OutputFormat::Html);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert_eq!(opts.export.out_dir(), std::path::Path::new("exports"));
    }

    #[test]
    fn format_names() {
        let args = Args::parse_from(["cli", "a.json", "--format", "txt"]);
        assert_eq!(args.options().output, OutputFormat::Text);
        assert_eq!(Args::parse_from(["cli", "a.json"]).options().output, OutputFormat::Text);
        assert!(Args::try_parse_from(["cli", "a.json", "--format", "xml"]).is_err());
    }

    #[test]
    fn tsv_needs_csv_dir() {
        assert!(Args::try_parse_from(["cli", "a.json", "--tsv"]).is_err());
    }

    #[test]
    fn no_files_is_an_error() {
        let err = run_with(Args::parse_from(["cli"])).unwrap_err();
        assert_eq!(err.to_string(), "Select up to 3 JSON files");
    }

    #[test]
    fn writes_report_and_exports() {
        let tmp = tempfile::tempdir().unwrap();
        let game = tmp.path().join("g.json");
        std::fs::write(&game, r#"{"players":[{"name":"A","team":"Red","position":"G","shotsFaced":5,"saves":5}]}"#).unwrap();
        let out = tmp.path().join("report.html");
        let dir = tmp.path().join("tables");

        let args = Args::parse_from([
            "cli", game.to_str().unwrap(), "--format", "html",
            "--out", out.to_str().unwrap(), "--csv", dir.to_str().unwrap(),
        ]);
        run_with(args).unwrap();

        assert!(std::fs::read_to_string(&out).unwrap().contains("<h3>Red Goalie</h3>"));
        assert!(dir.join("Red_Goalie.csv").exists());
    }
}
