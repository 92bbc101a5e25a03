// Tue Aug 25 2026 - Dan

use std::path::PathBuf;

/// Ordered pattern sources plus the single target to search.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub pattern_paths: Vec<PathBuf>,
    pub target: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, path: PathBuf) -> Self {
        self.pattern_paths.push(path);
        self
    }

    pub fn with_patterns(mut self, paths: Vec<PathBuf>) -> Self {
        self.pattern_paths.extend(paths);
        self
    }

    pub fn with_target(mut self, target: PathBuf) -> Self {
        self.target = Some(target);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_pattern_order() {
        let config = Config::new()
            .with_pattern(PathBuf::from("a.bin"))
            .with_pattern(PathBuf::from("b.bin"))
            .with_target(PathBuf::from("target.bin"));

        assert_eq!(config.pattern_paths.len(), 2);
        assert_eq!(config.pattern_paths[0], PathBuf::from("a.bin"));
        assert_eq!(config.pattern_paths[1], PathBuf::from("b.bin"));
        assert_eq!(config.target, Some(PathBuf::from("target.bin")));
    }
}
