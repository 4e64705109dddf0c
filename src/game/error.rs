//! Error types for game module
//!
//! Everything a move request, an undo/redo or a record load can reject. Engine failures
//! that reach this layer are wrapped unchanged.

use tablut_engine::{Coord, EngineError, IllegalMove, Side};

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The move breaks a movement rule
    #[error("Illegal move {origin} -> {target}: {reason}")]
    IllegalMove {
        origin: Coord,
        target: Coord,
        reason: IllegalMove,
    },

    /// The piece on the origin square belongs to the side not on move
    #[error("It is {expected}'s turn, the piece on {origin} belongs to {found}")]
    WrongSide {
        origin: Coord,
        expected: Side,
        found: Side,
    },

    /// A side has already won
    #[error("Game is over: {winner} won")]
    GameOver { winner: Side },

    /// Undo with nothing left to undo
    #[error("Already at the start of the game")]
    AtStart,

    /// Redo with nothing left to redo
    #[error("Already at the latest move")]
    AtEnd,

    /// A move was made after undo without permission to discard the undone moves
    #[error("Cannot move at ply {current} of {len} without discarding later moves")]
    HistoryBranchConflict { current: usize, len: usize },

    /// A saved game does not agree with the rules it was saved under
    #[error("Saved game disagrees at ply {ply}: {message}")]
    RecordMismatch { ply: usize, message: String },

    /// Engine precondition or setup failure
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
