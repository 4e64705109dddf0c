//! Game layer - sessions, history and saved games on top of `tablut_engine`
//!
//! The engine crate answers "is this move legal" and "what does it do to the board".
//! This module adds everything that spans more than one move: whose turn it is, the
//! undo/redo log, the win state and saved records.
//!
//! # Module Organization
//!
//! - `session` - [`GameSession`], the request/response boundary for one game
//! - `history` - [`TransitionLog`] and [`BranchPolicy`]
//! - `game_over` - [`GameOutcome`]
//! - `record` - [`GameRecord`] save/load format
//! - `error` - [`GameError`]

pub mod error;
pub mod game_over;
pub mod history;
pub mod record;
pub mod session;

pub use error::{GameError, GameResult};
pub use game_over::GameOutcome;
pub use history::{BranchPolicy, TransitionLog};
pub use record::GameRecord;
pub use session::GameSession;
