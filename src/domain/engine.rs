// Default engine factory for go matches.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::entities::{Match, MatchConfig};
use crate::domain::errors::EngineError;
use crate::domain::ports::MatchEngine;

pub const MIN_GRID_SIZE: u8 = 1;
pub const MAX_GRID_SIZE: u8 = 19;

// Allocates empty boards; holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoEngine;

impl MatchEngine for GoEngine {
    fn new_match(&self, config: MatchConfig) -> Result<Match, EngineError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&config.grid_size) {
            return Err(EngineError::InvalidGridSize(config.grid_size));
        }

        let size = usize::from(config.grid_size);
        Ok(Match {
            grid_size: config.grid_size,
            turn: 0,
            players: config.players,
            started_at: current_epoch_seconds(),
            board: vec![vec![None; size]; size],
        })
    }
}

fn current_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
