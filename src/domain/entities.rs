use serde::{Deserialize, Serialize};

// Stone color a player plays with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneColor {
    Black,
    White,
}

// Participant seated in a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: StoneColor,
}

// Settings handed to the engine when allocating a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub grid_size: u8,
    pub players: Vec<Player>,
}

impl MatchConfig {
    // Configuration with the given board size and no seated players.
    pub fn with_grid_size(grid_size: u8) -> Self {
        Self {
            grid_size,
            players: Vec::new(),
        }
    }
}

// Game session produced by the engine.
// Carries no externally visible identifier; that is minted per response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub grid_size: u8,
    pub turn: u32,
    pub players: Vec<Player>,
    pub started_at: u64,
    // Row-major board; `None` marks an empty point.
    pub board: Vec<Vec<Option<StoneColor>>>,
}
