use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Cell is already opened")]
    AlreadyOpened,
    #[error("Cell is flagged, unflag it before opening")]
    Flagged,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Too many mines, at least one cell must be safe")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
