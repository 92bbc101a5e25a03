// Tue Aug 25 2026 - Dan

pub mod pattern;
pub mod pattern_set;

pub use pattern::Pattern;
pub use pattern_set::PatternSet;
