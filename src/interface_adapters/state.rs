use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::engine::GoEngine;
use crate::domain::entities::Match;
use crate::domain::ports::{IdGenerator, MatchEngine, MatchRepository};

// Application state shared by the HTTP handlers.
// Every collaborator is injected so tests can swap in doubles.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn MatchEngine>,
    pub repository: Arc<dyn MatchRepository>,
    pub ids: Arc<dyn IdGenerator>,
    // Board size used when the request does not name one.
    pub default_grid_size: u8,
}

impl AppState {
    // Production wiring: go engine, in-memory store, uuid identifiers.
    pub fn in_memory(default_grid_size: u8) -> Self {
        Self {
            engine: Arc::new(GoEngine),
            repository: Arc::new(InMemoryMatchRepository::new()),
            ids: Arc::new(UuidGenerator),
            default_grid_size,
        }
    }
}

// Append-only in-memory match store.
// One RwLock serializes writers against each other and against readers.
#[derive(Clone, Default)]
pub struct InMemoryMatchRepository {
    matches: Arc<RwLock<Vec<Match>>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn add_match(&self, new_match: Match) -> Result<(), String> {
        let mut matches = self.matches.write().await;
        matches.push(new_match);
        Ok(())
    }

    async fn get_matches(&self) -> Result<Vec<Match>, String> {
        let matches = self.matches.read().await;
        Ok(matches.clone())
    }
}

// Random (v4) uuid source for match identifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
