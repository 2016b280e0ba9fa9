// Use cases layer: application workflows for the match service.

pub mod create_match;
pub mod list_matches;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_match::{CreateMatchUseCase, CreatedMatch};
pub use list_matches::ListMatchesUseCase;
