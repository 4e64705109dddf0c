//! Game session
//!
//! [`GameSession`] is the boundary a host talks to. It owns the board, the rules and the
//! transition log for one game and turns move intents into [`Transition`]s.
//!
//! # Request flow
//!
//! ```text
//! request_move(origin, target)
//!   ├─ log accepts another move?       (GameOver / HistoryBranchConflict)
//!   ├─ move legal on this board?       (IllegalMove)
//!   ├─ piece belongs to side on move?  (WrongSide)
//!   ├─ tablut_engine::apply            (board mutated here, and only here)
//!   └─ log.append
//! ```
//!
//! Every check runs before the board is touched, so a rejected request leaves the session
//! exactly as it was.

use tablut_engine::{
    apply, check_move, encode, legal_targets, replay, revert, Board, Coord, Preset,
    RuleConfiguration, Side, Transition,
};
use tracing::{debug, info, warn};

use crate::game::error::{GameError, GameResult};
use crate::game::game_over::GameOutcome;
use crate::game::history::{BranchPolicy, TransitionLog};

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    rules: RuleConfiguration,
    log: TransitionLog,
    initial_position: String,
}

impl GameSession {
    /// Start a game from a position and a rule set
    ///
    /// # Errors
    ///
    /// [`GameError::Engine`] if the notation does not decode for `size`.
    pub fn new(notation: &str, size: usize, rules: RuleConfiguration) -> GameResult<Self> {
        let board = tablut_engine::decode(notation, size)?;
        info!(
            "[GAME] New {}x{} game, {} to move",
            size, size, rules.first_move
        );
        Ok(GameSession {
            initial_position: encode(&board),
            board,
            rules,
            log: TransitionLog::new(),
        })
    }

    pub fn from_preset(preset: &Preset) -> GameResult<Self> {
        info!("[GAME] Using preset '{}'", preset.name);
        Self::new(preset.position, preset.size, preset.rules)
    }

    /// Make a move for the side on move
    ///
    /// Moving after undo is refused; use [`GameSession::request_move_with`] and
    /// [`BranchPolicy::Truncate`] to discard the undone moves instead.
    pub fn request_move(&mut self, origin: Coord, target: Coord) -> GameResult<Transition> {
        self.request_move_with(origin, target, BranchPolicy::Reject)
    }

    pub fn request_move_with(
        &mut self,
        origin: Coord,
        target: Coord,
        policy: BranchPolicy,
    ) -> GameResult<Transition> {
        self.log.check_append(policy)?;

        if let Err(reason) = check_move(&self.board, &self.rules, origin, target) {
            debug!("[GAME] Rejected {} -> {}: {}", origin, target, reason);
            return Err(GameError::IllegalMove {
                origin,
                target,
                reason,
            });
        }

        let expected = self.active_side();
        if let Some(piece) = self.board.piece_at(origin) {
            if piece.side != expected {
                return Err(GameError::WrongSide {
                    origin,
                    expected,
                    found: piece.side,
                });
            }
        }

        let transition = apply(&mut self.board, &self.rules, expected, origin, target)?;
        self.log.append(transition.clone(), policy)?;

        info!(
            "[GAME] {} {} -> {}",
            expected,
            origin.to_algebraic(self.board.size()),
            target.to_algebraic(self.board.size())
        );
        for captured in &transition.captured_pieces {
            info!(
                "[GAME] Captured {} piece {} on {}",
                captured.piece.side,
                captured.piece.id,
                captured.coord.to_algebraic(self.board.size())
            );
        }
        if let Some(winner) = transition.winning_side {
            info!("[GAME] {}", GameOutcome::Won(winner));
        }

        Ok(transition)
    }

    /// Take back the last applied move and return it
    pub fn undo(&mut self) -> GameResult<Transition> {
        let before = self.log.current();
        let transition = self.log.step_backward()?.clone();
        if let Err(e) = revert(&mut self.board, &transition) {
            warn!("[HISTORY] Undo failed, board out of step with log: {}", e);
            self.log.restore_cursor(before);
            return Err(e.into());
        }
        debug!("[HISTORY] Undo to ply {}", self.log.current());
        Ok(transition)
    }

    /// Re-apply the next undone move and return it
    pub fn redo(&mut self) -> GameResult<Transition> {
        let before = self.log.current();
        let transition = self.log.step_forward()?.clone();
        if let Err(e) = replay(&mut self.board, &transition) {
            warn!("[HISTORY] Redo failed, board out of step with log: {}", e);
            self.log.restore_cursor(before);
            return Err(e.into());
        }
        debug!("[HISTORY] Redo to ply {}", self.log.current());
        Ok(transition)
    }

    pub fn active_side(&self) -> Side {
        self.log.active_side(self.rules.first_move)
    }

    /// Current board, owned by the caller
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &RuleConfiguration {
        &self.rules
    }

    pub fn is_terminal(&self) -> bool {
        self.log.is_terminal()
    }

    pub fn winner(&self) -> Option<Side> {
        self.log.winner()
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from(self.winner())
    }

    /// Legal destinations for the piece on `origin`
    ///
    /// Empty when the game is over or the piece belongs to the side not on move.
    pub fn legal_targets(&self, origin: Coord) -> Vec<Coord> {
        let movable = self
            .board
            .piece_at(origin)
            .is_some_and(|piece| piece.side == self.active_side());
        if self.is_terminal() || !movable {
            return Vec::new();
        }
        legal_targets(&self.board, &self.rules, origin)
    }

    pub fn history(&self) -> &TransitionLog {
        &self.log
    }

    /// Notation of the current position
    pub fn position_notation(&self) -> String {
        encode(&self.board)
    }

    /// Notation of the position the game started from
    pub fn initial_position(&self) -> &str {
        &self.initial_position
    }
}
