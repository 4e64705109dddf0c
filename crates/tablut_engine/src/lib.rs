//! Tablut rules engine
//!
//! Pure game logic for Tablut and its smaller sibling Brandubh: board representation,
//! move legality, custodial capture, king escape and confinement, plus the inverse
//! operations needed to step a game backwards and forwards.
//!
//! The crate has no I/O and no logging. Hosts (the `tablut` session layer, a UI, a
//! server) feed it coordinates and receive [`Transition`] records describing what changed.
//!
//! # Module Structure
//!
//! - `types` - Sides, pieces, cells and coordinates
//! - `board` - The N×N grid and its special squares
//! - `rules` - Rule variant switches
//! - `notation` - Compact position notation (decode/encode)
//! - `validate` - Move legality
//! - `execute` - Move application, capture and endgame detection, undo/redo helpers
//! - `transition` - The record of one resolved move
//! - `preset` - Named board + rules bundles

pub mod board;
pub mod constants;
pub mod error;
pub mod execute;
pub mod notation;
pub mod preset;
pub mod rules;
pub mod transition;
pub mod types;
pub mod validate;

pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use execute::{apply, replay, revert};
pub use notation::{decode, encode};
pub use preset::Preset;
pub use rules::{
    CitadelAssist, KingAsSoldier, RuleConfiguration, ThroneAccess,
};
pub use transition::{CapturedPiece, Transition};
pub use types::{Cell, Coord, Piece, Side};
pub use validate::{check_move, has_legal_move, is_legal, legal_targets, IllegalMove};
