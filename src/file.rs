// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::error::ConvertError;
use crate::table::TableModel;

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

/// Stream one table to `path` as CSV/TSV; overwrites.
pub fn write_table_to_path(path: &Path, table: &TableModel, sep: char) -> io::Result<()> {
    ensure_parent(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    write_table(&mut out, table, sep)?;
    out.flush()
}

/// Export one table into the configured directory, named after its title.
/// Returns the path written.
pub fn export_table(opts: &ExportOptions, table: &TableModel) -> Result<PathBuf, ConvertError> {
    let path = opts.path_for(&table.title);
    write_table_to_path(&path, table, opts.format.delim())
        .map_err(|source| ConvertError::Export { path: path.clone(), source })?;
    logd!("Export: {} → {}", table.title, path.display());
    Ok(path)
}

/// Export a batch, stopping at the first failure.
pub fn export_tables<'a, I>(opts: &ExportOptions, tables: I) -> Result<Vec<PathBuf>, ConvertError>
where
    I: IntoIterator<Item = &'a TableModel>,
{
    tables.into_iter().map(|t| export_table(opts, t)).collect()
}

/// Write a rendered report (CLI `--out`).
pub fn write_report(path: &Path, text: &str) -> io::Result<()> {
    ensure_parent(path)?;
    fs::write(path, text)
}
