//! Tablut
//!
//! Game sessions, undo/redo history and saved games for the `tablut_engine` rules engine,
//! plus the rules-file and record persistence used by the `tablut` console host.
//!
//! ```
//! use tablut::game::GameSession;
//! use tablut_engine::{Coord, Preset, Side};
//!
//! let mut session = GameSession::from_preset(&Preset::brandubh()).unwrap();
//! assert_eq!(session.active_side(), Side::Attacker);
//!
//! session.request_move(Coord::new(0, 3), Coord::new(0, 1)).unwrap();
//! assert_eq!(session.active_side(), Side::Defender);
//!
//! session.undo().unwrap();
//! assert_eq!(session.position_notation(), Preset::brandubh().position);
//! ```

pub mod core;
pub mod game;
