//! Property-based tests for the rules engine and game sessions.
//!
//! Random boards check notation and legality laws; random games from the stock presets
//! check turn order and undo/redo.

use proptest::prelude::*;

use tablut::game::GameSession;
use tablut_engine::{decode, encode, is_legal, Board, Coord, Piece, Preset, RuleConfiguration, Side};

/// A board of edge `size` built from per-cell codes (0 empty, 1 attacker, 2 defender)
/// and an optional king square
fn build_board(size: usize, codes: &[u8], king: Option<usize>) -> Board {
    let mut board = Board::empty(size).unwrap();
    for (i, &code) in codes.iter().enumerate().take(size * size) {
        let coord = Coord::new((i / size) as u8, (i % size) as u8);
        let id = i as u32 + 1;
        let piece = if king == Some(i) {
            Piece::king(id)
        } else {
            match code {
                1 => Piece::soldier(id, Side::Attacker),
                2 => Piece::soldier(id, Side::Defender),
                _ => continue,
            }
        };
        board.place(coord, piece).unwrap();
    }
    board
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop_oneof![Just(5usize), Just(7), Just(9), Just(11), Just(13)].prop_flat_map(|size| {
        (
            prop::collection::vec(0u8..3, size * size),
            prop::option::of(0..size * size),
        )
            .prop_map(move |(codes, king)| build_board(size, &codes, king))
    })
}

/// Every legal `(origin, target)` for the side on move
fn all_moves(session: &GameSession) -> Vec<(Coord, Coord)> {
    let origins: Vec<Coord> = session
        .board()
        .pieces()
        .filter(|(_, piece)| piece.side == session.active_side())
        .map(|(coord, _)| coord)
        .collect();
    origins
        .into_iter()
        .flat_map(|origin| {
            session
                .legal_targets(origin)
                .into_iter()
                .map(move |target| (origin, target))
        })
        .collect()
}

/// Play up to `choices.len()` pseudo-random legal moves, stopping at a win or a stalemate
fn play_random(session: &mut GameSession, choices: &[usize]) -> Vec<Board> {
    let mut snapshots = vec![session.board_snapshot()];
    for &choice in choices {
        if session.is_terminal() {
            break;
        }
        let moves = all_moves(session);
        if moves.is_empty() {
            break;
        }
        let (origin, target) = moves[choice % moves.len()];
        session.request_move(origin, target).unwrap();
        snapshots.push(session.board_snapshot());
    }
    snapshots
}

fn arb_preset() -> impl Strategy<Value = Preset> {
    prop_oneof![Just(Preset::tablut()), Just(Preset::brandubh())]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Encoding then decoding gives back the same position
    #[test]
    fn prop_notation_round_trip(board in arb_board()) {
        let notation = encode(&board);
        let decoded = decode(&notation, board.size()).unwrap();
        prop_assert_eq!(&decoded, &board);
        prop_assert_eq!(encode(&decoded), notation);
    }

    /// A soldier that can slide from `a` to `b` can slide back again
    #[test]
    fn prop_legality_symmetric(
        board in arb_board(),
        row in 0u8..5,
        from_col in 0u8..5,
        to_col in 0u8..5,
        side in prop_oneof![Just(Side::Attacker), Just(Side::Defender)],
    ) {
        let size = board.size();
        let scale = (size / 5) as u8;
        let a = Coord::new(row * scale, from_col * scale);
        let b = Coord::new(row * scale, to_col * scale);
        prop_assume!(a != b);

        let mut forward = Board::empty(size).unwrap();
        let mut backward = Board::empty(size).unwrap();
        for (coord, piece) in board.pieces() {
            if coord != a && coord != b {
                forward.place(coord, *piece).unwrap();
                backward.place(coord, *piece).unwrap();
            }
        }
        forward.place(a, Piece::soldier(0, side)).unwrap();
        backward.place(b, Piece::soldier(0, side)).unwrap();

        let rules = RuleConfiguration::default();
        let endpoints_open = !forward.is_corner(a)
            && !forward.is_corner(b)
            && !forward.is_throne(a)
            && !forward.is_throne(b);
        prop_assume!(endpoints_open);
        prop_assert_eq!(
            is_legal(&forward, &rules, a, b),
            is_legal(&backward, &rules, b, a)
        );
    }

    /// The side to move flips after every accepted move
    #[test]
    fn prop_turns_alternate(
        preset in arb_preset(),
        choices in prop::collection::vec(any::<usize>(), 1..40),
    ) {
        let mut session = GameSession::from_preset(&preset).unwrap();
        let mut expected = preset.rules.first_move;
        for &choice in &choices {
            if session.is_terminal() {
                break;
            }
            let moves = all_moves(&session);
            if moves.is_empty() {
                break;
            }
            prop_assert_eq!(session.active_side(), expected);
            let (origin, target) = moves[choice % moves.len()];
            let transition = session.request_move(origin, target).unwrap();
            prop_assert_eq!(transition.side(), expected);
            expected = expected.opposite();
        }
    }

    /// Undo walks back through exactly the positions played, and redo walks forward again
    #[test]
    fn prop_undo_redo_inverse(
        preset in arb_preset(),
        choices in prop::collection::vec(any::<usize>(), 1..30),
    ) {
        let mut session = GameSession::from_preset(&preset).unwrap();
        let snapshots = play_random(&mut session, &choices);
        let played = snapshots.len() - 1;

        for expected in snapshots.iter().rev().skip(1) {
            session.undo().unwrap();
            let actual = session.board_snapshot();
            prop_assert_eq!(actual.cells(), expected.cells());
        }
        prop_assert!(session.undo().is_err());

        for expected in snapshots.iter().skip(1) {
            session.redo().unwrap();
            let actual = session.board_snapshot();
            prop_assert_eq!(actual.cells(), expected.cells());
        }
        prop_assert!(session.redo().is_err());
        prop_assert_eq!(session.history().current(), played);
    }

    /// A saved game reloads to the same position and history
    #[test]
    fn prop_record_reloads(
        preset in arb_preset(),
        choices in prop::collection::vec(any::<usize>(), 0..20),
        back in 0usize..5,
    ) {
        let mut session = GameSession::from_preset(&preset).unwrap();
        play_random(&mut session, &choices);
        for _ in 0..back {
            if session.undo().is_err() {
                break;
            }
        }

        let restored = GameSession::from_record(&session.to_record()).unwrap();
        let restored_board = restored.board_snapshot();
        let session_board = session.board_snapshot();
        prop_assert_eq!(restored_board.cells(), session_board.cells());
        prop_assert_eq!(restored.history(), session.history());
        prop_assert_eq!(restored.active_side(), session.active_side());
    }
}
