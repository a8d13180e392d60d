use thiserror::Error;

/// Errors raised at the boundary of the engine: notation parsing, board
/// validation and the turn controller. The search itself never fails.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board notation has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("both X and O hold a completed line")]
    ConflictingWinners,

    #[error("invalid move notation '{0}' (expected 'r,c' or 'rc' with digits 0-2)")]
    InvalidMoveNotation(String),

    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("engine plays X but it is O to move")]
    NotEngineTurn,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
