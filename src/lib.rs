// Thu Aug 27 2026 - Dan

pub mod config;
pub mod memory;
pub mod pattern;
pub mod search;

pub use config::Config;
pub use memory::{FileMapper, MappedBuffer, MemoryError, MmapMapper};
pub use pattern::{Pattern, PatternSet};
pub use search::{Match, MatchEngine, MatchReport, SearchError, SearchSession};
