// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::DEFAULT_OUT_DIR;
use crate::core::sanitize::title_to_file_stem;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub export: ExportOptions,
    pub output: OutputFormat,
}

/// How a whole conversion report is rendered (CLI).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    #[cfg_attr(feature = "cli", value(alias = "txt"))]
    Text,
    Html,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path { &self.out_dir }

    /// Parse GUI/CLI text into the output directory. Blank keeps the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { PathBuf::from(s) };
    }

    /// "Blue Skaters" → "Blue_Skaters.csv"
    pub fn file_name_for(&self, title: &str) -> String {
        format!("{}.{}", title_to_file_stem(title), self.format.ext())
    }

    pub fn path_for(&self, title: &str) -> PathBuf {
        self.out_dir.join(self.file_name_for(title))
    }
}
