//! Saved games
//!
//! A [`GameRecord`] is the starting position, the rules and every recorded transition,
//! plus the cursor so a game saved mid-review reopens at the same ply. Loading does not
//! trust the stored transitions: each one is replayed through the engine and must come
//! out identical.

use serde::{Deserialize, Serialize};
use tablut_engine::{RuleConfiguration, Transition};
use tracing::info;

use crate::game::error::{GameError, GameResult};
use crate::game::session::GameSession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board_size: usize,
    pub initial_position: String,
    #[serde(default)]
    pub rules: RuleConfiguration,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    /// Number of transitions applied when saved
    pub cursor: usize,
}

impl GameSession {
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            board_size: self.board().size(),
            initial_position: self.initial_position().to_string(),
            rules: *self.rules(),
            transitions: self.history().as_slice().to_vec(),
            cursor: self.history().current(),
        }
    }

    /// Rebuild a session by replaying `record`
    ///
    /// # Errors
    ///
    /// - [`GameError::Engine`] if the starting position does not decode
    /// - [`GameError::RecordMismatch`] if a stored transition is not what the engine
    ///   produces for the same move, or the cursor is past the end
    pub fn from_record(record: &GameRecord) -> GameResult<Self> {
        if record.cursor > record.transitions.len() {
            return Err(GameError::RecordMismatch {
                ply: record.cursor,
                message: format!(
                    "cursor {} is past the last of {} transitions",
                    record.cursor,
                    record.transitions.len()
                ),
            });
        }

        let mut session =
            GameSession::new(&record.initial_position, record.board_size, record.rules)?;

        for (ply, stored) in record.transitions.iter().enumerate() {
            let computed = session
                .request_move(stored.origin, stored.target)
                .map_err(|e| GameError::RecordMismatch {
                    ply,
                    message: e.to_string(),
                })?;
            if computed != *stored {
                return Err(GameError::RecordMismatch {
                    ply,
                    message: format!(
                        "move {} -> {} resolves differently under these rules",
                        stored.origin, stored.target
                    ),
                });
            }
        }

        while session.history().current() > record.cursor {
            session.undo()?;
        }

        info!(
            "[RECORD] Loaded {} transition(s), positioned at ply {}",
            record.transitions.len(),
            record.cursor
        );
        Ok(session)
    }
}

