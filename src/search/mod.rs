// Tue Aug 25 2026 - Dan

pub mod engine;
pub mod error;
pub mod report;
pub mod session;

pub use engine::MatchEngine;
pub use error::SearchError;
pub use report::{Match, MatchReport};
pub use session::SearchSession;
