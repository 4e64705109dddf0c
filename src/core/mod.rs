//! Core module - configuration and file persistence
//!
//! - [`rules_persistence`] - rules lookup and saved-game files
//! - [`error`] - [`CoreError`]

pub mod error;
pub mod rules_persistence;

pub use error::{CoreError, CoreResult};
pub use rules_persistence::{
    config_rules_path, load_record, load_rules, read_rules, rules_to_json, save_record,
};
