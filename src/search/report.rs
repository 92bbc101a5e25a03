// Tue Aug 25 2026 - Dan

use std::fmt;

/// One occurrence of a pattern in the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pattern: String,
    offset: usize,
    len: usize,
}

impl Match {
    pub fn new(pattern: &str, offset: usize, len: usize) -> Self {
        Self {
            pattern: pattern.to_string(),
            offset,
            len,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file {} placed at offset 0x{:X} len 0x{:X} ({}) bytes!",
            self.pattern, self.offset, self.len, self.len
        )
    }
}

/// Ordered match lines for one session: patterns in registration order,
/// offsets ascending within each pattern.
#[derive(Debug, Default)]
pub struct MatchReport {
    entries: Vec<Match>,
}

impl MatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Match) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Match] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overall success: at least one pattern matched at least once.
    pub fn matched_any(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.entries.iter()
    }
}
