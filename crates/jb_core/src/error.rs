use thiserror::Error;

/// Errors from operations that can genuinely fail: loading layouts,
/// game states, configuration and JSON payloads.
///
/// Rejected moves are not errors; see [`crate::rules::MoveRejection`].
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("Invalid rules config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
