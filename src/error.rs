//! Error types for folio-tui.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    #[error("invalid color '{value}' for {role}: expected #rrggbb")]
    InvalidColor { role: String, value: String },

    #[error("layout failed: {0}")]
    Layout(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
