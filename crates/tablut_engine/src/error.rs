//! Error types for the rules engine
//!
//! Covers position parsing, board setup, and misuse of the executor. Illegal user moves
//! are reported separately through [`crate::validate::IllegalMove`].

use thiserror::Error;

use crate::types::Coord;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Position notation could not be parsed
    #[error("Malformed position notation: {message}")]
    MalformedNotation { message: String },

    /// Board edge is even or outside the supported range
    #[error("Unsupported board size: {size} (must be odd, 5-19)")]
    UnsupportedBoardSize { size: usize },

    /// Coordinate does not lie on the board
    #[error("Square {coord} is off a {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    /// Setup tried to place a piece on an occupied square
    #[error("Square {coord} is already occupied")]
    SquareOccupied { coord: Coord },

    /// Setup tried to place a second king
    #[error("Board already has a king")]
    DuplicateKing,

    /// Executor was called without the legality check holding, or a transition
    /// does not match the board it is replayed against
    #[error("Precondition violated: {message}")]
    PreconditionViolated { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
