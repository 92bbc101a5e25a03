// Tue Aug 25 2026 - Dan

use crate::memory::MemoryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No patterns registered")]
    NoPatterns,
    #[error("No target file specified")]
    NoTarget,
    #[error("Failed to load pattern {path}: {source}")]
    PatternLoad {
        path: PathBuf,
        source: MemoryError,
    },
    #[error("Failed to map target {path}: {source}")]
    TargetMap {
        path: PathBuf,
        source: MemoryError,
    },
}
