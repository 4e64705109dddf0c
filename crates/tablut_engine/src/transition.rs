//! Transition records
//!
//! A [`Transition`] is everything a host needs to show one resolved move: which piece went
//! where, what was captured, and whether the move ended the game. It is also enough to undo
//! or redo the move against the board (see [`crate::execute`]).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Coord, Piece, Side};

/// A piece removed by a capture, with the square it was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturedPiece {
    pub coord: Coord,
    pub piece: Piece,
}

/// One completed move
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    pub origin: Coord,
    pub target: Coord,
    /// The piece that moved
    pub mover: Piece,
    /// Captures in scan order (up, down, left, right from `target`)
    #[cfg_attr(feature = "serde", serde(default))]
    pub captured_pieces: Vec<CapturedPiece>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub winning_side: Option<Side>,
}

impl Transition {
    /// Whether this move ended the game
    pub fn is_winning(&self) -> bool {
        self.winning_side.is_some()
    }

    /// Side that made the move
    pub fn side(&self) -> Side {
        self.mover.side
    }
}
