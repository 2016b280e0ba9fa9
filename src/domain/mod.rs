// Domain layer: match entities, engine rules, and the ports the use cases depend on.

pub mod engine;
pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{Match, MatchConfig, Player, StoneColor};
