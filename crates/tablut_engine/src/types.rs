//! Core value types: sides, pieces, cells and coordinates
//!
//! Coordinates are `(row, col)` with row 0 at the top of the board, matching the rank
//! order of the position notation. Algebraic names (`a9`, `e5`) count files from the left
//! and ranks from the bottom.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{ATTACKER_CODE, DEFENDER_CODE, KING_CODE};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Besiegers; win by confining the king
    #[default]
    Attacker,
    /// The king's guard; win by bringing the king to a corner
    Defender,
}

impl Side {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => write!(f, "Attacker"),
            Side::Defender => write!(f, "Defender"),
        }
    }
}

/// A piece on the board
///
/// `id` is a stable identity handle for hosts that track piece sprites across moves.
/// Only a defender can be the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub id: u32,
    pub side: Side,
    pub is_king: bool,
}

impl Piece {
    /// A non-king piece of the given side
    pub fn soldier(id: u32, side: Side) -> Self {
        Piece {
            id,
            side,
            is_king: false,
        }
    }

    /// The defenders' king
    pub fn king(id: u32) -> Self {
        Piece {
            id,
            side: Side::Defender,
            is_king: true,
        }
    }

    /// Notation code for this piece
    pub fn code(&self) -> char {
        match (self.side, self.is_king) {
            (_, true) => KING_CODE,
            (Side::Attacker, false) => ATTACKER_CODE,
            (Side::Defender, false) => DEFENDER_CODE,
        }
    }

    /// Same side and rank, ignoring identity
    pub fn same_kind(&self, other: &Piece) -> bool {
        self.side == other.side && self.is_king == other.is_king
    }
}

/// Content of one board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }
}

/// A square on the board, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }

    /// Whether the square lies on a board of edge `size`
    pub fn in_bounds(self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }

    /// The square `(dr, dc)` away, if it is still on the board
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Coord> {
        let row = i32::from(self.row) + dr;
        let col = i32::from(self.col) + dc;
        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }

    /// Whether both squares share a row or a column
    pub fn is_aligned(self, other: Coord) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Whether the squares touch along a row or column
    pub fn is_orthogonally_adjacent(self, other: Coord) -> bool {
        let dr = (i32::from(self.row) - i32::from(other.row)).abs();
        let dc = (i32::from(self.col) - i32::from(other.col)).abs();
        dr + dc == 1
    }

    /// Algebraic name on a board of edge `size` (`a1` is the bottom-left square)
    ///
    /// # Examples
    ///
    /// ```
    /// use tablut_engine::Coord;
    /// assert_eq!(Coord::new(0, 0).to_algebraic(9), "a9");
    /// assert_eq!(Coord::new(4, 4).to_algebraic(9), "e5");
    /// ```
    pub fn to_algebraic(self, size: usize) -> String {
        let file = (b'a' + self.col) as char;
        let rank = size - self.row as usize;
        format!("{}{}", file, rank)
    }

    /// Parse an algebraic name such as `e5` or `k11`
    ///
    /// Returns `None` for malformed text or squares off a board of edge `size`.
    pub fn from_algebraic(s: &str, size: usize) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let file = chars.next()?.to_ascii_lowercase();
        if !file.is_ascii_lowercase() {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let rank: usize = digits.parse().ok()?;
        let col = (file as u8 - b'a') as usize;
        if rank == 0 || rank > size || col >= size {
            return None;
        }
        Some(Coord::new((size - rank) as u8, col as u8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
