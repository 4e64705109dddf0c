//! Position notation
//!
//! A FEN-like string describing piece placement, top rank first. Ranks are separated by
//! `/`; within a rank, a decimal number is a run of empty squares and a letter is a piece:
//! `a` attacker, `p` defender, `k` king.
//!
//! ```text
//! 3aaa3/4a4/4p4/a3p3a/aappkppaa/a3p3a/4p4/4a4/3aaa3
//! ```
//!
//! Decoding assigns piece ids in reading order (`row * size + col + 1`), so a freshly
//! decoded board always carries the same ids for the same notation.

use crate::board::{is_supported_size, Board};
use crate::constants::{ATTACKER_CODE, DEFENDER_CODE, KING_CODE, RANK_DELIMITER};
use crate::error::{EngineError, EngineResult};
use crate::types::{Coord, Piece, Side};

fn malformed(message: impl Into<String>) -> EngineError {
    EngineError::MalformedNotation {
        message: message.into(),
    }
}

/// Parse `notation` into a board of edge `size`
///
/// # Errors
///
/// - [`EngineError::UnsupportedBoardSize`] if `size` is not playable
/// - [`EngineError::MalformedNotation`] if the rank count, a rank's width, a character,
///   or the king count is wrong
///
/// # Examples
///
/// ```
/// use tablut_engine::{decode, Coord};
/// let board = decode("3a3/3a3/3p3/aapkpaa/3p3/3a3/3a3", 7).unwrap();
/// assert_eq!(board.king_position(), Some(Coord::new(3, 3)));
/// ```
pub fn decode(notation: &str, size: usize) -> EngineResult<Board> {
    if !is_supported_size(size) {
        return Err(EngineError::UnsupportedBoardSize { size });
    }

    let ranks: Vec<&str> = notation.trim().split(RANK_DELIMITER).collect();
    if ranks.len() != size {
        return Err(malformed(format!(
            "expected {} rank delimiters, found {}",
            size - 1,
            ranks.len() - 1
        )));
    }

    let mut board = Board::empty(size)?;
    let mut kings = 0;

    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        let mut chars = rank.chars().peekable();

        while let Some(c) = chars.next() {
            if let Some(digit) = c.to_digit(10) {
                // A run never starts with 0, so "0" and "07" are both rejected
                if digit == 0 {
                    return Err(malformed(format!("rank {} has an empty run", row + 1)));
                }
                let mut run = digit as usize;
                while let Some(next) = chars.peek().and_then(|n| n.to_digit(10)) {
                    run = run.saturating_mul(10).saturating_add(next as usize);
                    chars.next();
                }
                col = col.saturating_add(run);
                if col > size {
                    return Err(malformed(format!("rank {} is wider than {}", row + 1, size)));
                }
                continue;
            }

            if col >= size {
                return Err(malformed(format!("rank {} is wider than {}", row + 1, size)));
            }
            let id = (row * size + col + 1) as u32;
            let piece = match c {
                ATTACKER_CODE => Piece::soldier(id, Side::Attacker),
                DEFENDER_CODE => Piece::soldier(id, Side::Defender),
                KING_CODE => {
                    kings += 1;
                    if kings > 1 {
                        return Err(malformed("more than one king"));
                    }
                    Piece::king(id)
                }
                other => {
                    return Err(malformed(format!(
                        "unknown piece code '{}' in rank {}",
                        other,
                        row + 1
                    )))
                }
            };
            board.place(Coord::new(row as u8, col as u8), piece)?;
            col += 1;
        }

        if col != size {
            return Err(malformed(format!(
                "rank {} expands to {} squares, expected {}",
                row + 1,
                col,
                size
            )));
        }
    }

    Ok(board)
}

/// Render `board` as position notation
///
/// Inverse of [`decode`]: `decode(&encode(&b), b.size()) == b` for every board.
pub fn encode(board: &Board) -> String {
    let size = board.size();
    let mut out = String::with_capacity(size * (size + 1));

    for row in 0..size {
        if row > 0 {
            out.push(RANK_DELIMITER);
        }
        let mut run = 0;
        for col in 0..size {
            match board.piece_at(Coord::new(row as u8, col as u8)) {
                Some(piece) => {
                    if run > 0 {
                        out.push_str(&run.to_string());
                        run = 0;
                    }
                    out.push(piece.code());
                }
                None => run += 1,
            }
        }
        if run > 0 {
            out.push_str(&run.to_string());
        }
    }

    out
}
