use async_trait::async_trait;

use crate::domain::entities::{Match, MatchConfig};
use crate::domain::errors::EngineError;

// Port for the engine that allocates new game sessions.
pub trait MatchEngine: Send + Sync {
    fn new_match(&self, config: MatchConfig) -> Result<Match, EngineError>;
}

// Port for match storage used by the match use cases.
// Implementations must make each add fully visible or not at all to readers.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn add_match(&self, new_match: Match) -> Result<(), String>;
    async fn get_matches(&self) -> Result<Vec<Match>, String>;
}

// Port for minting identifiers handed back to clients.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
