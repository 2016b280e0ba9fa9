use std::env;
use std::ops::RangeInclusive;

use crate::domain::engine::{MAX_GRID_SIZE, MIN_GRID_SIZE};

// Runtime/server settings read from the environment.

pub const DEFAULT_HTTP_PORT: u16 = 3004;
// Board size used when a create request does not name one.
pub const DEFAULT_GRID_SIZE: u8 = 5;

const ACCEPTED_GRID_SIZES: RangeInclusive<u8> = MIN_GRID_SIZE..=MAX_GRID_SIZE;

pub fn http_port() -> u16 {
    env::var("MATCH_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

pub fn default_grid_size() -> u8 {
    resolve_grid_size(env::var("MATCH_DEFAULT_GRID_SIZE").ok().as_deref())
}

// Values the engine would reject fall back to the built-in default.
fn resolve_grid_size(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return DEFAULT_GRID_SIZE;
    };

    match raw.trim().parse::<u8>() {
        Ok(size) if ACCEPTED_GRID_SIZES.contains(&size) => size,
        _ => {
            tracing::warn!(
                value = raw,
                fallback = DEFAULT_GRID_SIZE,
                "MATCH_DEFAULT_GRID_SIZE outside {}..={}, using fallback",
                MIN_GRID_SIZE,
                MAX_GRID_SIZE
            );
            DEFAULT_GRID_SIZE
        }
    }
}
