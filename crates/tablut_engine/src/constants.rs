//! Engine constants: piece codes, supported sizes and stock positions

/// Notation code for an attacker soldier
pub const ATTACKER_CODE: char = 'a';

/// Notation code for a defender soldier
pub const DEFENDER_CODE: char = 'p';

/// Notation code for the king
pub const KING_CODE: char = 'k';

/// Rank separator in position notation
pub const RANK_DELIMITER: char = '/';

/// Smallest supported board edge
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board edge
pub const MAX_BOARD_SIZE: usize = 19;

/// Standard 9×9 Tablut opening position
pub const TABLUT_POSITION: &str = "3aaa3/4a4/4p4/a3p3a/aappkppaa/a3p3a/4p4/4a4/3aaa3";

/// 7×7 Brandubh opening position
pub const BRANDUBH_POSITION: &str = "3a3/3a3/3p3/aapkpaa/3p3/3a3/3a3";

/// Orthogonal step offsets as (row, col): up, down, left, right
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
