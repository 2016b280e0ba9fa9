use crate::domain::entities::Match;
use crate::domain::errors::MatchError;
use crate::domain::ports::MatchRepository;

// Enumerates every stored match in insertion order.
pub struct ListMatchesUseCase<'a, R: ?Sized> {
    pub repository: &'a R,
}

impl<R> ListMatchesUseCase<'_, R>
where
    R: MatchRepository + ?Sized,
{
    pub async fn execute(&self) -> Result<Vec<Match>, MatchError> {
        self.repository
            .get_matches()
            .await
            .map_err(|_| MatchError::StorageFailure)
    }
}
