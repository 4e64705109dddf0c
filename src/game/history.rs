//! Transition log
//!
//! Ordered record of every resolved move plus a cursor marking how many of them are
//! currently applied to the board. Undo moves the cursor back, redo moves it forward;
//! the log never touches the board itself. The session pairs each cursor step with
//! [`tablut_engine::revert`] or [`tablut_engine::replay`].
//!
//! ```text
//! transitions: [t0, t1, t2, t3]
//! current:              ^ 2   (t0 and t1 are on the board, t2 and t3 can be redone)
//! ```

use tablut_engine::{Side, Transition};
use tracing::debug;

use crate::game::error::{GameError, GameResult};

/// What to do with undone moves when a new move is appended after undo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchPolicy {
    /// Refuse the append with [`GameError::HistoryBranchConflict`]
    #[default]
    Reject,
    /// Discard every transition from the cursor onwards, then append
    Truncate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionLog {
    transitions: Vec<Transition>,
    current: usize,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transition at the cursor
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the last recorded transition won the game
    /// - [`GameError::HistoryBranchConflict`] if moves were undone and `policy` is
    ///   [`BranchPolicy::Reject`]
    pub fn append(&mut self, transition: Transition, policy: BranchPolicy) -> GameResult<()> {
        self.check_append(policy)?;
        if self.current < self.transitions.len() {
            debug!(
                "[HISTORY] Discarding {} undone transition(s)",
                self.transitions.len() - self.current
            );
            self.transitions.truncate(self.current);
        }
        self.transitions.push(transition);
        self.current += 1;
        Ok(())
    }

    /// Whether [`TransitionLog::append`] would accept a transition under `policy`
    pub fn check_append(&self, policy: BranchPolicy) -> GameResult<()> {
        if let Some(winner) = self.winner() {
            return Err(GameError::GameOver { winner });
        }
        if self.current != self.transitions.len() && policy == BranchPolicy::Reject {
            return Err(GameError::HistoryBranchConflict {
                current: self.current,
                len: self.transitions.len(),
            });
        }
        Ok(())
    }

    /// Move the cursor back one step and return the transition to invert
    pub fn step_backward(&mut self) -> GameResult<&Transition> {
        if self.current == 0 {
            return Err(GameError::AtStart);
        }
        self.current -= 1;
        Ok(&self.transitions[self.current])
    }

    /// Return the transition to re-apply and move the cursor forward one step
    pub fn step_forward(&mut self) -> GameResult<&Transition> {
        let transition = self.transitions.get(self.current).ok_or(GameError::AtEnd)?;
        self.current += 1;
        Ok(transition)
    }

    /// Undo a [`TransitionLog::step_backward`] whose board update failed
    pub(crate) fn restore_cursor(&mut self, current: usize) {
        self.current = current.min(self.transitions.len());
    }

    /// Side to move at the cursor
    pub fn active_side(&self, first_move: Side) -> Side {
        if self.current % 2 == 0 {
            first_move
        } else {
            first_move.opposite()
        }
    }

    /// Whether the last recorded transition won the game
    ///
    /// Stays true while reviewing earlier positions with undo.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        self.transitions.last().and_then(|t| t.winning_side)
    }

    /// Number of applied transitions
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of recorded transitions, applied or not
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Most recently applied transition
    pub fn last_applied(&self) -> Option<&Transition> {
        self.current.checked_sub(1).and_then(|i| self.transitions.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&Transition> {
        self.transitions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    pub fn as_slice(&self) -> &[Transition] {
        &self.transitions
    }
}
