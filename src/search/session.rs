// Tue Aug 25 2026 - Dan

use crate::config::Config;
use crate::memory::{FileMapper, MmapMapper};
use crate::pattern::{Pattern, PatternSet};
use crate::search::{Match, MatchEngine, MatchReport, SearchError};

/// Drives one search: maps every configured pattern, maps the target once,
/// runs the engine per pattern in registration order, then releases every
/// buffer. Buffers are released exactly once on every path, including the
/// abort paths, because each one is dropped by the session that owns it.
pub struct SearchSession<M: FileMapper = MmapMapper> {
    mapper: M,
    config: Config,
    patterns: PatternSet<M::Buffer>,
    target: Option<M::Buffer>,
}

impl SearchSession<MmapMapper> {
    pub fn new(config: Config) -> Self {
        Self::with_mapper(config, MmapMapper)
    }
}

impl<M: FileMapper> SearchSession<M> {
    pub fn with_mapper(config: Config, mapper: M) -> Self {
        Self {
            mapper,
            config,
            patterns: PatternSet::new(),
            target: None,
        }
    }

    /// Registers every configured pattern source, in order. Any failure
    /// aborts the session; buffers already acquired are released before
    /// the error is surfaced.
    pub fn load_patterns(&mut self) -> Result<(), SearchError> {
        for index in 0..self.config.pattern_paths.len() {
            let path = self.config.pattern_paths[index].clone();
            match self.mapper.map(&path) {
                Ok(buffer) => {
                    let name = path.display().to_string();
                    log::debug!("registered pattern {}", name);
                    self.patterns.append(Pattern::new(&name, buffer));
                }
                Err(e) => {
                    self.release();
                    return Err(SearchError::PatternLoad { path, source: e });
                }
            }
        }
        Ok(())
    }

    /// Maps the target. Refuses before touching the target file if no
    /// pattern was registered or no target path was configured.
    pub fn map_target(&mut self) -> Result<(), SearchError> {
        if self.patterns.is_empty() {
            return Err(SearchError::NoPatterns);
        }
        let path = match self.config.target.clone() {
            Some(path) => path,
            None => {
                self.release();
                return Err(SearchError::NoTarget);
            }
        };
        match self.mapper.map(&path) {
            Ok(buffer) => {
                self.target = Some(buffer);
                Ok(())
            }
            Err(e) => {
                self.release();
                Err(SearchError::TargetMap { path, source: e })
            }
        }
    }

    /// Runs the engine once per pattern in registration order. Overall
    /// success is any pattern matching anywhere, not all patterns matching.
    pub fn search(&self) -> Result<MatchReport, SearchError> {
        let target = self.target.as_ref().ok_or(SearchError::NoTarget)?;
        let mut report = MatchReport::new();
        for pattern in self.patterns.iter() {
            let offsets = MatchEngine::find_all(pattern.bytes(), target.as_ref());
            if offsets.is_empty() {
                log::debug!("pattern {} not found in target", pattern.name());
            }
            for offset in offsets {
                report.push(Match::new(pattern.name(), offset, pattern.len()));
            }
        }
        Ok(report)
    }

    /// Releases the target buffer and drains every pattern buffer. Safe to
    /// call in any state; already-released sessions have nothing to drop.
    pub fn close(&mut self) {
        self.release();
    }

    /// Full lifecycle: load patterns, map target, search, close.
    pub fn run(mut self) -> Result<MatchReport, SearchError> {
        self.load_patterns()?;
        self.map_target()?;
        let report = self.search()?;
        self.close();
        Ok(report)
    }

    fn release(&mut self) {
        if self.target.take().is_some() {
            log::debug!("released target buffer");
        }
        let drained = self.patterns.drain().count();
        if drained > 0 {
            log::debug!("released {} pattern buffer(s)", drained);
        }
    }
}
