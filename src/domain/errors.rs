// Domain-level errors for match workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum MatchError {
    // Client supplied a configuration the service refuses before touching the engine.
    InvalidRequest(String),
    EngineFailure,
    StorageFailure,
}

// Errors raised by the engine factory.
#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    InvalidGridSize(u8),
}
