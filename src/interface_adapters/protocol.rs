// Wire protocol DTOs for the public match API.

use crate::domain::{Match, MatchConfig, Player, StoneColor};
use serde::{Deserialize, Serialize};

/// Optional payload for `POST /matches`; an empty body means "all defaults".
#[derive(Debug, Default, Deserialize)]
pub struct NewMatchRequest {
    #[serde(default)]
    pub gridsize: Option<u8>,
    #[serde(default)]
    pub players: Vec<PlayerDto>,
}

impl NewMatchRequest {
    // Resolve the engine configuration, falling back to the server default board size.
    pub fn into_config(self, default_grid_size: u8) -> MatchConfig {
        MatchConfig {
            grid_size: self.gridsize.unwrap_or(default_grid_size),
            players: self.players.into_iter().map(Player::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDto {
    pub color: StoneColor,
    pub name: String,
}

impl From<PlayerDto> for Player {
    fn from(player: PlayerDto) -> Self {
        Self {
            name: player.name,
            color: player.color,
        }
    }
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            color: player.color,
            name: player.name.clone(),
        }
    }
}

/// Body returned alongside `201 Created`.
#[derive(Debug, Serialize)]
pub struct NewMatchResponse {
    pub id: String,
}

/// Flattened match state for the enumeration endpoint.
#[derive(Debug, Serialize)]
pub struct MatchSummary {
    pub gridsize: u8,
    pub turn: u32,
    pub players: Vec<PlayerDto>,
    pub started_at: u64,
}

impl From<&Match> for MatchSummary {
    fn from(stored: &Match) -> Self {
        Self {
            gridsize: stored.grid_size,
            turn: stored.turn,
            players: stored.players.iter().map(PlayerDto::from).collect(),
            started_at: stored.started_at,
        }
    }
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
