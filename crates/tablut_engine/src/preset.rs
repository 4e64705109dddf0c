//! Named board and rule bundles
//!
//! A preset fixes everything needed to start a game: board edge, opening position and
//! rule switches.

use crate::board::Board;
use crate::constants::{BRANDUBH_POSITION, TABLUT_POSITION};
use crate::error::EngineResult;
use crate::notation::decode;
use crate::rules::{CitadelAssist, RuleConfiguration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub size: usize,
    pub position: &'static str,
    pub rules: RuleConfiguration,
}

impl Preset {
    /// 9×9 Tablut
    ///
    /// The throne helps surround the king; corners do not.
    pub fn tablut() -> Self {
        Preset {
            name: "tablut",
            size: 9,
            position: TABLUT_POSITION,
            rules: RuleConfiguration {
                citadel_confinement_assist: CitadelAssist {
                    corners: false,
                    throne: true,
                },
                ..RuleConfiguration::default()
            },
        }
    }

    /// 7×7 Brandubh with default rules
    pub fn brandubh() -> Self {
        Preset {
            name: "brandubh",
            size: 7,
            position: BRANDUBH_POSITION,
            rules: RuleConfiguration::default(),
        }
    }

    pub fn all() -> Vec<Preset> {
        vec![Preset::tablut(), Preset::brandubh()]
    }

    /// Case-insensitive lookup
    pub fn by_name(name: &str) -> Option<Preset> {
        Preset::all()
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Opening position of this preset
    pub fn board(&self) -> EngineResult<Board> {
        decode(self.position, self.size)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Preset::tablut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Side};

    #[test]
    fn test_tablut_opening() {
        let preset = Preset::tablut();
        let board = preset.board().unwrap();

        assert_eq!(board.size(), 9);
        assert_eq!(board.count(Side::Attacker), 16);
        assert_eq!(board.count(Side::Defender), 9, "Eight defenders and the king");
        assert_eq!(board.king_position(), Some(Coord::new(4, 4)));
        assert!(preset.rules.citadel_confinement_assist.throne);
        assert!(!preset.rules.citadel_confinement_assist.corners);
    }

    #[test]
    fn test_brandubh_opening() {
        let board = Preset::brandubh().board().unwrap();

        assert_eq!(board.size(), 7);
        assert_eq!(board.count(Side::Attacker), 8);
        assert_eq!(board.count(Side::Defender), 5);
        assert_eq!(board.king_position(), Some(board.throne()));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Preset::by_name("Brandubh").map(|p| p.size), Some(7));
        assert_eq!(Preset::by_name(" tablut ").map(|p| p.size), Some(9));
        assert!(Preset::by_name("hnefatafl").is_none());
    }
}
