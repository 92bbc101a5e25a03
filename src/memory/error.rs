// Tue Aug 25 2026 - Dan

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("File {path} is empty")]
    Empty { path: PathBuf },
    #[error("Failed to map {path}: {source}")]
    Map {
        path: PathBuf,
        source: std::io::Error,
    },
}
