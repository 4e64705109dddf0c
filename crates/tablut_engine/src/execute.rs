//! Move execution
//!
//! [`apply`] resolves one legal move in a fixed order:
//!
//! 1. relocate the piece
//! 2. king on a corner: the defenders win, nothing else is evaluated
//! 3. attacker lands next to the king: test confinement
//! 4. custodial capture scan in the four directions from the target
//! 5. the other side has no legal move left: the mover wins
//!
//! [`revert`] and [`replay`] take a recorded [`Transition`] backwards and forwards over the
//! board, which is how the session implements undo and redo.

use crate::board::Board;
use crate::constants::ORTHOGONAL;
use crate::error::{EngineError, EngineResult};
use crate::rules::RuleConfiguration;
use crate::transition::{CapturedPiece, Transition};
use crate::types::{Coord, Piece, Side};
use crate::validate::{check_move, has_legal_move};

fn precondition(message: String) -> EngineError {
    EngineError::PreconditionViolated { message }
}

/// Apply a move for `active_side` and describe the result
///
/// # Errors
///
/// [`EngineError::PreconditionViolated`] if the move is illegal or the piece on `origin`
/// does not belong to `active_side`. Callers are expected to validate first; the board is
/// left untouched on error.
pub fn apply(
    board: &mut Board,
    rules: &RuleConfiguration,
    active_side: Side,
    origin: Coord,
    target: Coord,
) -> EngineResult<Transition> {
    check_move(board, rules, origin, target)
        .map_err(|e| precondition(format!("move {} -> {} is illegal: {}", origin, target, e)))?;

    let mover = board
        .relocate_if(origin, target, |piece| piece.side == active_side)
        .ok_or_else(|| precondition(format!("piece on {} does not belong to {}", origin, active_side)))?;

    let mut transition = Transition {
        origin,
        target,
        mover,
        captured_pieces: Vec::new(),
        winning_side: None,
    };

    if mover.is_king && board.is_corner(target) {
        transition.winning_side = Some(Side::Defender);
        return Ok(transition);
    }

    if mover.side == Side::Attacker {
        if let Some(king) = board.king_position() {
            if king.is_orthogonally_adjacent(target) && is_confined(board, rules, king) {
                transition.winning_side = Some(Side::Attacker);
            }
        }
    }

    if rules.is_hammer(mover.is_king) {
        transition.captured_pieces = capture(board, rules, &mover, target);
    }

    let opponent = mover.side.opposite();
    if transition.winning_side.is_none() && !has_legal_move(board, rules, opponent) {
        transition.winning_side = Some(mover.side);
    }

    Ok(transition)
}

/// Whether every orthogonal neighbour of the king is an edge or a confiner
pub fn is_confined(board: &Board, rules: &RuleConfiguration, king: Coord) -> bool {
    ORTHOGONAL.iter().all(|&(dr, dc)| {
        match king.offset(dr, dc, board.size()) {
            None => true,
            Some(neighbour) => is_confiner(board, rules, neighbour),
        }
    })
}

fn is_confiner(board: &Board, rules: &RuleConfiguration, coord: Coord) -> bool {
    let assist = rules.citadel_confinement_assist;
    (assist.corners && board.is_corner(coord))
        || (assist.throne && board.is_throne(coord))
        || board
            .piece_at(coord)
            .is_some_and(|piece| piece.side == Side::Attacker)
}

/// Whether `coord` closes a capture for `side`
fn is_anvil(board: &Board, rules: &RuleConfiguration, side: Side, coord: Coord) -> bool {
    match board.piece_at(coord) {
        Some(piece) => piece.side == side && rules.is_anvil(piece.is_king),
        None => {
            let assist = rules.citadel_capture_assist;
            (assist.throne && board.is_throne(coord)) || (assist.corners && board.is_corner(coord))
        }
    }
}

/// Remove every enemy soldier sandwiched between `target` and an anvil
fn capture(
    board: &mut Board,
    rules: &RuleConfiguration,
    mover: &Piece,
    target: Coord,
) -> Vec<CapturedPiece> {
    let size = board.size();
    let mut captured = Vec::new();

    for &(dr, dc) in ORTHOGONAL.iter() {
        let (Some(victim), Some(anvil)) = (
            target.offset(dr, dc, size),
            target.offset(2 * dr, 2 * dc, size),
        ) else {
            continue;
        };
        // The king is only ever lost by confinement, never sandwiched
        let is_enemy_soldier = board
            .piece_at(victim)
            .is_some_and(|piece| piece.side != mover.side && !piece.is_king);
        if is_enemy_soldier && is_anvil(board, rules, mover.side, anvil) {
            if let Some(piece) = board.take(victim) {
                captured.push(CapturedPiece {
                    coord: victim,
                    piece,
                });
            }
        }
    }

    captured
}

/// Undo `transition`: put captures back and return the mover to its origin
///
/// # Errors
///
/// [`EngineError::PreconditionViolated`] if the board is not in the position the
/// transition produced. The board is untouched on error.
pub fn revert(board: &mut Board, transition: &Transition) -> EngineResult<()> {
    if board.piece_at(transition.target) != Some(&transition.mover) {
        return Err(precondition(format!(
            "mover {} is not on {}",
            transition.mover.id, transition.target
        )));
    }
    if !board.is_empty(transition.origin) {
        return Err(precondition(format!("origin {} is not empty", transition.origin)));
    }
    if let Some(blocked) = transition
        .captured_pieces
        .iter()
        .find(|c| !board.is_empty(c.coord))
    {
        return Err(precondition(format!(
            "capture square {} is not empty",
            blocked.coord
        )));
    }

    board.relocate(transition.target, transition.origin);
    for captured in &transition.captured_pieces {
        board.put(captured.coord, captured.piece);
    }
    Ok(())
}

/// Redo `transition`: move the mover forward and remove its captures again
///
/// # Errors
///
/// [`EngineError::PreconditionViolated`] if the board is not in the position the
/// transition started from. The board is untouched on error.
pub fn replay(board: &mut Board, transition: &Transition) -> EngineResult<()> {
    if board.piece_at(transition.origin) != Some(&transition.mover) {
        return Err(precondition(format!(
            "mover {} is not on {}",
            transition.mover.id, transition.origin
        )));
    }
    if !board.is_empty(transition.target) {
        return Err(precondition(format!("target {} is not empty", transition.target)));
    }
    if let Some(missing) = transition
        .captured_pieces
        .iter()
        .find(|c| board.piece_at(c.coord) != Some(&c.piece))
    {
        return Err(precondition(format!(
            "captured piece {} is not on {}",
            missing.piece.id, missing.coord
        )));
    }

    board.relocate(transition.origin, transition.target);
    for captured in &transition.captured_pieces {
        board.take(captured.coord);
    }
    Ok(())
}
