// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a game file could not be turned into players.
#[derive(Debug, Error)]
pub enum GameParseError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read \"players\" of null")]
    NullRoot,

    #[error("\"players\" must be an array, found {0}")]
    PlayersNotArray(&'static str),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Convert pressed with nothing selected.
    #[error("Select up to 3 JSON files")]
    NoFiles,

    /// Drop contained no JSON candidate.
    #[error("Please drop JSON files.")]
    NoJsonDropped,

    #[error("Error reading {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: GameParseError,
    },

    #[error("Copy failed: {0}")]
    Copy(String),

    #[error("Export failed ({}): {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
