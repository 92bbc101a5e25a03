// Tue Aug 25 2026 - Dan

use crate::pattern::Pattern;

/// Ordered, append-only collection of patterns. Insertion order is the
/// search order and the report order, so the backing store must keep it.
/// Duplicate names or contents are all kept and all searched.
pub struct PatternSet<B: AsRef<[u8]>> {
    entries: Vec<Pattern<B>>,
}

impl<B: AsRef<[u8]>> PatternSet<B> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, pattern: Pattern<B>) {
        self.entries.push(pattern);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern<B>> {
        self.entries.iter()
    }

    /// Yields ownership of every entry in insertion order and leaves the
    /// set empty. Each drained pattern drops its buffer exactly once.
    pub fn drain(&mut self) -> impl Iterator<Item = Pattern<B>> + '_ {
        self.entries.drain(..)
    }
}

impl<B: AsRef<[u8]>> Default for PatternSet<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut set = PatternSet::new();
        set.append(Pattern::new("first", vec![1u8]));
        set.append(Pattern::new("second", vec![2u8]));
        set.append(Pattern::new("third", vec![3u8]));

        let names: Vec<_> = set.iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["first", "second", "third"]);

        // Restartable: a second pass sees the same sequence.
        let again: Vec<_> = set.iter().map(|p| p.name().to_string()).collect();
        assert_eq!(again, names);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut set = PatternSet::new();
        set.append(Pattern::new("same", vec![0xAAu8]));
        set.append(Pattern::new("same", vec![0xAAu8]));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_drain_empties_the_set() {
        let mut set = PatternSet::new();
        set.append(Pattern::new("a", vec![1u8]));
        set.append(Pattern::new("b", vec![2u8]));

        let drained: Vec<_> = set.drain().collect();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].name(), "a");
        assert!(set.is_empty());
    }
}
