//! Board representation
//!
//! An N×N grid of [`Cell`]s stored row-major. The board knows its own geometry (throne,
//! corners, bounds) but no rules; legality and captures live in `validate` and `execute`.
//!
//! Equality is positional: two boards compare equal when every square holds the same kind
//! of piece, regardless of piece ids. Ids cannot be recovered from position notation, and
//! position is what the game rules care about. Use [`Board::cells`] to compare identities.

use std::fmt;

use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, ORTHOGONAL};
use crate::error::{EngineError, EngineResult};
use crate::types::{Cell, Coord, Piece, Side};

#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with edge `size`
    pub fn empty(size: usize) -> EngineResult<Self> {
        if !is_supported_size(size) {
            return Err(EngineError::UnsupportedBoardSize { size });
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Board edge length
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.row as usize * self.size + coord.col as usize
    }

    /// Cell at `coord`, or `None` if off the board
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if !coord.in_bounds(self.size) {
            return None;
        }
        self.cells.get(self.index(coord))
    }

    /// Piece at `coord`, if any
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.cell(coord).and_then(Cell::piece)
    }

    /// Whether `coord` is on the board and empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.cell(coord), Some(Cell::Empty))
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// The centre square
    pub fn throne(&self) -> Coord {
        let middle = (self.size / 2) as u8;
        Coord::new(middle, middle)
    }

    pub fn is_throne(&self, coord: Coord) -> bool {
        coord == self.throne()
    }

    /// The four corner squares
    pub fn corners(&self) -> [Coord; 4] {
        let last = (self.size - 1) as u8;
        [
            Coord::new(0, 0),
            Coord::new(0, last),
            Coord::new(last, 0),
            Coord::new(last, last),
        ]
    }

    pub fn is_corner(&self, coord: Coord) -> bool {
        self.corners().contains(&coord)
    }

    /// Location of the king, if one is on the board
    pub fn king_position(&self) -> Option<Coord> {
        self.pieces()
            .find(|(_, piece)| piece.is_king)
            .map(|(coord, _)| coord)
    }

    /// Iterate over occupied squares in reading order
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, &Piece)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.piece()
                .map(|piece| (Coord::new((i / size) as u8, (i % size) as u8), piece))
        })
    }

    /// Number of pieces belonging to `side` (the king counts for the defenders)
    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }

    /// On-board orthogonal neighbours of `coord`
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dr, dc)| coord.offset(dr, dc, self.size))
    }

    /// Squares strictly between two aligned squares, walking from `a` towards `b`
    ///
    /// Returns an empty list for unaligned or adjacent squares. The set of squares is the
    /// same whichever endpoint is passed first.
    pub fn cells_between(&self, a: Coord, b: Coord) -> Vec<Coord> {
        if a == b || !a.is_aligned(b) {
            return Vec::new();
        }
        let dr = (i32::from(b.row) - i32::from(a.row)).signum();
        let dc = (i32::from(b.col) - i32::from(a.col)).signum();
        let mut between = Vec::new();
        let mut current = a;
        while let Some(next) = current.offset(dr, dc, self.size) {
            if next == b {
                break;
            }
            between.push(next);
            current = next;
        }
        between
    }

    /// Place a new piece during setup
    ///
    /// Fails if the square is off the board or taken, or if a second king is added.
    pub fn place(&mut self, coord: Coord, piece: Piece) -> EngineResult<()> {
        if !self.in_bounds(coord) {
            return Err(EngineError::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        if !self.is_empty(coord) {
            return Err(EngineError::SquareOccupied { coord });
        }
        if piece.is_king && self.king_position().is_some() {
            return Err(EngineError::DuplicateKing);
        }
        let index = self.index(coord);
        self.cells[index] = Cell::Occupied(piece);
        Ok(())
    }

    /// Remove and return the piece at `coord`
    pub(crate) fn take(&mut self, coord: Coord) -> Option<Piece> {
        if !self.in_bounds(coord) {
            return None;
        }
        let index = self.index(coord);
        match std::mem::take(&mut self.cells[index]) {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty => None,
        }
    }

    /// Put `piece` on an in-bounds square, overwriting whatever was there
    pub(crate) fn put(&mut self, coord: Coord, piece: Piece) {
        let index = self.index(coord);
        self.cells[index] = Cell::Occupied(piece);
    }

    /// Move the piece on `from` to `to`; the caller guarantees `to` is empty
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let piece = self.take(from)?;
        self.put(to, piece);
        Some(piece)
    }

    /// [`Board::relocate`] only when the piece on `from` satisfies `accept`
    pub(crate) fn relocate_if(
        &mut self,
        from: Coord,
        to: Coord,
        accept: impl FnOnce(&Piece) -> bool,
    ) -> Option<Piece> {
        if !self.piece_at(from).is_some_and(accept) {
            return None;
        }
        self.relocate(from, to)
    }
}

/// Whether `size` is a playable board edge
pub fn is_supported_size(size: usize) -> bool {
    size % 2 == 1 && (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| match (a.piece(), b.piece()) {
                    (None, None) => true,
                    (Some(x), Some(y)) => x.same_kind(y),
                    _ => false,
                })
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    /// Text diagram with algebraic rulers; `+` marks the empty throne, `#` empty corners
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            write!(f, "{:>2} ", self.size - row)?;
            for col in 0..self.size {
                let coord = Coord::new(row as u8, col as u8);
                let symbol = match self.piece_at(coord) {
                    Some(piece) => piece.code(),
                    None if self.is_throne(coord) => '+',
                    None if self.is_corner(coord) => '#',
                    None => '.',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}
