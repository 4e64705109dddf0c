//! Rules and saved-game persistence
//!
//! Reads [`RuleConfiguration`] files and reads/writes [`GameRecord`] files as JSON.
//!
//! # Rules lookup
//!
//! 1. An explicit path (`tablut play --rules FILE`). It must exist.
//! 2. `rules.json` in the user's config directory, e.g.
//!    `~/.config/tablut/rules.json` or `%APPDATA%\trilltino\Tablut\config\rules.json`
//! 3. `rules.json` in the working directory
//!
//! If none of the implicit files exists the caller's fallback rules are used. A file that
//! exists but cannot be read or parsed is an error rather than a silent fallback, so a
//! typo in a rules file never starts a game under the wrong rules.
//!
//! Missing JSON fields take their default values, so `{}` is a valid rules file.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tablut_engine::RuleConfiguration;
use tracing::{debug, info};

use crate::core::error::{CoreError, CoreResult};
use crate::game::GameRecord;

/// Rules filename
const RULES_FILENAME: &str = "rules.json";

/// `rules.json` in the user's configuration directory, if the platform has one
pub fn config_rules_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "trilltino", "Tablut")
        .map(|dirs| dirs.config_dir().join(RULES_FILENAME))
}

/// Implicit rules locations in lookup order
fn implicit_rules_paths() -> Vec<PathBuf> {
    config_rules_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(RULES_FILENAME)))
        .collect()
}

/// Resolve the rules for a new game
///
/// See the module docs for the lookup order.
pub fn load_rules(explicit: Option<&Path>, fallback: RuleConfiguration) -> CoreResult<RuleConfiguration> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CoreError::RulesNotFound {
                path: path.to_path_buf(),
            });
        }
        return read_rules(path);
    }

    for path in implicit_rules_paths() {
        if path.exists() {
            return read_rules(&path);
        }
        debug!("[RULES] No rules file at {:?}", path);
    }

    info!("[RULES] No rules file found. Using preset rules.");
    Ok(fallback)
}

/// Parse one rules file
pub fn read_rules(path: &Path) -> CoreResult<RuleConfiguration> {
    let contents = fs::read_to_string(path)?;
    let rules = serde_json::from_str::<RuleConfiguration>(&contents)?;
    info!("[RULES] Loaded rules from {:?}", path);
    Ok(rules)
}

/// Rules as pretty JSON, with every field spelled out
pub fn rules_to_json(rules: &RuleConfiguration) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(rules)?)
}

/// Write `record` to `path`, creating parent directories as needed
pub fn save_record(path: &Path, record: &GameRecord) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    info!(
        "[RECORD] Saved {} transition(s) to {:?}",
        record.transitions.len(),
        path
    );
    Ok(())
}

/// Read a record from `path`
///
/// Only the JSON shape is checked here; [`crate::game::GameSession::from_record`]
/// replays the moves.
pub fn load_record(path: &Path) -> CoreResult<GameRecord> {
    let contents = fs::read_to_string(path)?;
    let record = serde_json::from_str::<GameRecord>(&contents)?;
    debug!("[RECORD] Read record from {:?}", path);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rules_file_is_default() {
        let rules: RuleConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, RuleConfiguration::default());
    }

    #[test]
    fn test_partial_rules_file() {
        //! Nested groups may be given partially too
        let rules: RuleConfiguration = serde_json::from_str(
            r#"{ "first_move": "defender", "citadel_confinement_assist": { "throne": true } }"#,
        )
        .unwrap();

        assert_eq!(rules.first_move, tablut_engine::Side::Defender);
        assert!(rules.citadel_confinement_assist.throne);
        assert!(rules.citadel_confinement_assist.corners, "Unnamed field keeps its default");
        assert!(!rules.king_may_reenter_throne);
    }

    #[test]
    fn test_explicit_rules_path_must_exist() {
        let missing = Path::new("definitely/not/here/rules.json");
        let err = load_rules(Some(missing), RuleConfiguration::default()).unwrap_err();
        assert!(matches!(err, CoreError::RulesNotFound { .. }));
    }

    #[test]
    fn test_rules_json_lists_every_field() {
        let json = rules_to_json(&RuleConfiguration::default()).unwrap();
        for field in [
            "first_move",
            "king_counts_as_soldier_for_capture",
            "citadel_capture_assist",
            "citadel_confinement_assist",
            "soldiers_may_use_throne",
            "king_may_reenter_throne",
        ] {
            assert!(json.contains(field), "missing {}", field);
        }
    }
}
