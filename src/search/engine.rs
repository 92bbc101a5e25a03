// Tue Aug 25 2026 - Dan

/// Byte-exact substring search over mapped buffers.
pub struct MatchEngine;

impl MatchEngine {
    /// Every offset in the target where the pattern occurs, ascending.
    /// Overlapping occurrences are all reported independently. A pattern
    /// longer than the target yields no candidate windows and no matches.
    pub fn find_all(pattern: &[u8], target: &[u8]) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > target.len() {
            return Vec::new();
        }

        target
            .windows(pattern.len())
            .enumerate()
            .filter(|(_, window)| *window == pattern)
            .map(|(offset, _)| offset)
            .collect()
    }
}
