use crate::domain::entities::{MatchConfig, Player};
use crate::domain::errors::MatchError;
use crate::domain::ports::{IdGenerator, MatchEngine, MatchRepository};

// Result of a successful match creation.
#[derive(Debug)]
pub struct CreatedMatch {
    pub id: String,
    pub grid_size: u8,
}

// Match creation use case with injected dependencies.
pub struct CreateMatchUseCase<'a, E: ?Sized, R: ?Sized, G: ?Sized> {
    pub engine: &'a E,
    pub repository: &'a R,
    pub ids: &'a G,
}

impl<E, R, G> CreateMatchUseCase<'_, E, R, G>
where
    E: MatchEngine + ?Sized,
    R: MatchRepository + ?Sized,
    G: IdGenerator + ?Sized,
{
    pub async fn execute(&self, config: MatchConfig) -> Result<CreatedMatch, MatchError> {
        validate_players(&config.players)?;

        let new_match = self
            .engine
            .new_match(config)
            .map_err(|_| MatchError::EngineFailure)?;
        let grid_size = new_match.grid_size;

        self.repository
            .add_match(new_match)
            .await
            .map_err(|_| MatchError::StorageFailure)?;

        // The id is only a reference token for the client; the repository never sees it.
        let id = self.ids.next_id();

        Ok(CreatedMatch { id, grid_size })
    }
}

fn validate_players(players: &[Player]) -> Result<(), MatchError> {
    // A go match seats at most one black and one white player.
    const MAX_PLAYERS: usize = 2;

    if players.len() > MAX_PLAYERS {
        return Err(MatchError::InvalidRequest(format!(
            "at most {MAX_PLAYERS} players are allowed"
        )));
    }
    if players
        .iter()
        .any(|player| player.name.is_empty() || player.name.trim() != player.name)
    {
        return Err(MatchError::InvalidRequest(
            "player name must not be blank or padded with whitespace".to_string(),
        ));
    }
    if let [first, second] = players {
        if first.color == second.color {
            return Err(MatchError::InvalidRequest(
                "players must use different colors".to_string(),
            ));
        }
    }

    Ok(())
}
