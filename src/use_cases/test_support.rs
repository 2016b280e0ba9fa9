use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::engine::GoEngine;
use crate::domain::entities::{Match, MatchConfig};
use crate::domain::errors::EngineError;
use crate::domain::ports::{IdGenerator, MatchEngine, MatchRepository};

pub(crate) type MatchTable = Arc<Mutex<Vec<Match>>>;

// Id source that yields "match-1", "match-2", ... for deterministic assertions.
#[derive(Default)]
pub(crate) struct SequenceIds {
    next: AtomicU64,
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("match-{n}")
    }
}

// Engine double that counts calls and optionally rejects every request.
#[derive(Default)]
pub(crate) struct StubEngine {
    pub calls: AtomicU64,
    pub fail: bool,
}

impl StubEngine {
    pub(crate) fn failing() -> Self {
        Self {
            calls: AtomicU64::new(0),
            fail: true,
        }
    }
}

impl MatchEngine for StubEngine {
    fn new_match(&self, config: MatchConfig) -> Result<Match, EngineError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fail {
            return Err(EngineError::InvalidGridSize(config.grid_size));
        }
        GoEngine.new_match(config)
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub add: bool,
    pub get: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingRepository {
    matches: MatchTable,
    failures: FailureFlags,
}

impl RecordingRepository {
    pub(crate) fn new() -> Self {
        Self {
            matches: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_match(&self, grid_size: u8) {
        let seeded = GoEngine
            .new_match(MatchConfig::with_grid_size(grid_size))
            .expect("test grid size should be valid");
        let mut guard = self.matches.lock().expect("matches mutex poisoned");
        guard.push(seeded);
    }

    pub(crate) fn stored(&self) -> Vec<Match> {
        let guard = self.matches.lock().expect("matches mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl MatchRepository for RecordingRepository {
    async fn add_match(&self, new_match: Match) -> Result<(), String> {
        if self.failures.add {
            return Err("add failed".to_string());
        }

        let mut guard = self.matches.lock().expect("matches mutex poisoned");
        guard.push(new_match);
        Ok(())
    }

    async fn get_matches(&self) -> Result<Vec<Match>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.matches.lock().expect("matches mutex poisoned");
        Ok(guard.clone())
    }
}
