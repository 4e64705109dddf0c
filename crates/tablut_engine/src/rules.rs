//! Rule variant switches
//!
//! Tablut was never standardised, so the engine exposes the points where historical and
//! modern rule sets disagree. A [`RuleConfiguration`] is fixed for the lifetime of a game.
//!
//! With the `serde` feature enabled every field is optional when deserialising; missing
//! fields take the [`Default`] values:
//!
//! | Field                                  | Default            |
//! |----------------------------------------|--------------------|
//! | `first_move`                           | attacker           |
//! | `king_counts_as_soldier_for_capture`   | hammer no, anvil no |
//! | `citadel_capture_assist`               | corners yes, throne no |
//! | `citadel_confinement_assist`           | corners yes, throne no |
//! | `soldiers_may_use_throne`              | enter no, pass no  |
//! | `king_may_reenter_throne`              | no                 |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Side;

/// Whether the king takes part in custodial captures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KingAsSoldier {
    /// The king can complete a capture by moving
    pub as_hammer: bool,
    /// The king can be the far side of a defender capture
    pub as_anvil: bool,
}

/// Which empty special squares act as hostile terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CitadelAssist {
    pub corners: bool,
    pub throne: bool,
}

impl Default for CitadelAssist {
    fn default() -> Self {
        CitadelAssist {
            corners: true,
            throne: false,
        }
    }
}

/// What non-king pieces may do with the throne
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThroneAccess {
    pub enter: bool,
    pub pass_through: bool,
}

/// Rule variant selection for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleConfiguration {
    pub first_move: Side,
    pub king_counts_as_soldier_for_capture: KingAsSoldier,
    /// Terrain that completes a capture in place of an anvil piece
    pub citadel_capture_assist: CitadelAssist,
    /// Terrain that counts toward surrounding the king
    pub citadel_confinement_assist: CitadelAssist,
    pub soldiers_may_use_throne: ThroneAccess,
    pub king_may_reenter_throne: bool,
}

impl RuleConfiguration {
    /// Whether `piece_is_king` may act as the moving side of a capture
    pub fn is_hammer(&self, piece_is_king: bool) -> bool {
        !piece_is_king || self.king_counts_as_soldier_for_capture.as_hammer
    }

    /// Whether `piece_is_king` may act as the far side of a capture
    pub fn is_anvil(&self, piece_is_king: bool) -> bool {
        !piece_is_king || self.king_counts_as_soldier_for_capture.as_anvil
    }
}
