use thiserror::Error;

/// Configuration failures. Invalid runtime input (bad moves, stray answers)
/// never surfaces here; those resolve to `false` on the session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("game cannot start: player name is invalid or the level has no questions")]
    CannotStart,

    #[error("session has already ended")]
    SessionEnded,

    #[error("not enough free cells to place {requested} questions and 1 goal (only {available} free)")]
    NotEnoughFreeCells { requested: usize, available: usize },

    #[error("maze of size {size} has no room for a goal (size must be at least 3)")]
    MazeTooSmall { size: usize },

    #[error("invalid level: {0}")]
    InvalidLevel(String),

    #[error("unknown level '{0}'")]
    UnknownTier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
