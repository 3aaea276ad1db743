use thiserror::Error;

/// Caller-input rejections surfaced by the engine. Every variant is a
/// deterministic function of the request and current game state; none of
/// them leaves a game partially mutated.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid game parameters: width and height must be at most {max}, and the mine count must leave at least one safe cell", max = crate::MAX_DIM)]
    InvalidParameters,
    #[error("game not found")]
    GameNotFound,
    #[error("game is already completed, no new turns are accepted")]
    AlreadyCompleted,
    #[error("cell coordinates are outside the board")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
