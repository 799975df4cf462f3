use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeDbError {
    #[error("Invalid key name: {0}")]
    InvalidKey(String),

    #[error("Invalid section name: {0}")]
    InvalidSection(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Key not found: {section}/{key}")]
    KeyNotFound { section: String, key: String },

    #[error("Name conflict: {0}")]
    NameConflict(String),

    #[error("Refusing to replace {0} with empty output")]
    EmptyWriteAborted(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ThemeDbError>;
