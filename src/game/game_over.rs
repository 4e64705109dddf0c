//! Game outcome
//!
//! ```text
//! InProgress → InProgress (legal non-winning move)
//! InProgress → Won(side)  (king escapes, or king confined)
//! ```
//!
//! `Won` is terminal: no further moves are accepted, though undo and redo still walk the
//! recorded game.

use std::fmt;

use tablut_engine::Side;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won(Side),
}

impl GameOutcome {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Won(side) => Some(*side),
            GameOutcome::InProgress => None,
        }
    }

    /// Human-readable result line
    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::InProgress => "Game in progress",
            GameOutcome::Won(Side::Defender) => "Defenders win: the king escaped!",
            GameOutcome::Won(Side::Attacker) => "Attackers win: the king is surrounded!",
        }
    }
}

impl From<Option<Side>> for GameOutcome {
    fn from(winner: Option<Side>) -> Self {
        winner.map_or(GameOutcome::InProgress, GameOutcome::Won)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
