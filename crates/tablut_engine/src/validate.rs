//! Move legality
//!
//! Every piece moves like a rook: any distance along a row or column over empty squares.
//! Special squares add restrictions: only the king may stop on a corner, and the throne is
//! closed to soldiers (and to a returning king) unless the rules open it.
//!
//! These are pure functions over the current board. Turn order is not checked here; the
//! session and [`crate::execute::apply`] check that the mover belongs to the side to move.

use thiserror::Error;

use crate::board::Board;
use crate::rules::RuleConfiguration;
use crate::types::{Coord, Side};

/// The first legality rule a move breaks
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("square {coord} is off the board")]
    OutOfBounds { coord: Coord },

    #[error("origin and target are the same square")]
    NullMove,

    #[error("no piece on {origin}")]
    NoPiece { origin: Coord },

    #[error("pieces move along a row or column only")]
    NotAligned,

    #[error("path is blocked at {blocker}")]
    PathBlocked { blocker: Coord },

    #[error("target {target} is occupied")]
    TargetOccupied { target: Coord },

    #[error("only the king may stop on a corner")]
    CornerReserved,

    #[error("soldiers may not stop on the throne")]
    ThroneReserved,

    #[error("the king may not return to the throne")]
    ThroneReentry,

    #[error("soldiers may not pass over the throne")]
    ThronePassage,
}

/// Check a move and report the first rule it breaks
pub fn check_move(
    board: &Board,
    rules: &RuleConfiguration,
    origin: Coord,
    target: Coord,
) -> Result<(), IllegalMove> {
    for coord in [origin, target] {
        if !board.in_bounds(coord) {
            return Err(IllegalMove::OutOfBounds { coord });
        }
    }
    if origin == target {
        return Err(IllegalMove::NullMove);
    }
    let piece = board
        .piece_at(origin)
        .ok_or(IllegalMove::NoPiece { origin })?;
    if !origin.is_aligned(target) {
        return Err(IllegalMove::NotAligned);
    }

    let between = board.cells_between(origin, target);
    if let Some(&blocker) = between.iter().find(|c| !board.is_empty(**c)) {
        return Err(IllegalMove::PathBlocked { blocker });
    }
    if !board.is_empty(target) {
        return Err(IllegalMove::TargetOccupied { target });
    }

    if !piece.is_king && board.is_corner(target) {
        return Err(IllegalMove::CornerReserved);
    }
    if board.is_throne(target) {
        if !piece.is_king && !rules.soldiers_may_use_throne.enter {
            return Err(IllegalMove::ThroneReserved);
        }
        // The throne is the king's home square: arriving there is always a return
        if piece.is_king && !rules.king_may_reenter_throne {
            return Err(IllegalMove::ThroneReentry);
        }
    }
    if !piece.is_king
        && !rules.soldiers_may_use_throne.pass_through
        && between.contains(&board.throne())
    {
        return Err(IllegalMove::ThronePassage);
    }

    Ok(())
}

/// Whether moving the piece on `origin` to `target` is legal
pub fn is_legal(board: &Board, rules: &RuleConfiguration, origin: Coord, target: Coord) -> bool {
    check_move(board, rules, origin, target).is_ok()
}

/// All legal destinations for the piece on `origin`
///
/// Empty if `origin` is empty or off the board.
pub fn legal_targets(board: &Board, rules: &RuleConfiguration, origin: Coord) -> Vec<Coord> {
    let mut targets = Vec::new();
    if board.piece_at(origin).is_none() {
        return targets;
    }
    let size = board.size();
    for i in 0..size as u8 {
        for target in [Coord::new(origin.row, i), Coord::new(i, origin.col)] {
            if target != origin && is_legal(board, rules, origin, target) {
                targets.push(target);
            }
        }
    }
    targets.sort();
    targets
}

/// Whether `side` has at least one legal move
pub fn has_legal_move(board: &Board, rules: &RuleConfiguration, side: Side) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .any(|(coord, _)| !legal_targets(board, rules, coord).is_empty())
}
