//! Rules Engine Benchmarks
//!
//! Performance benchmarks for the hot engine paths using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tablut::game::GameSession;
use tablut_engine::{apply, decode, encode, has_legal_move, legal_targets, Coord, Preset, Side};

fn bench_decode_opening(c: &mut Criterion) {
    let preset = Preset::tablut();

    c.bench_function("decode_tablut_opening", |b| {
        b.iter(|| black_box(decode(black_box(preset.position), preset.size)))
    });
}

fn bench_encode_opening(c: &mut Criterion) {
    let board = Preset::tablut().board().unwrap();

    c.bench_function("encode_tablut_opening", |b| b.iter(|| black_box(encode(&board))));
}

fn bench_legal_targets_all(c: &mut Criterion) {
    let preset = Preset::tablut();
    let board = preset.board().unwrap();

    c.bench_function("legal_targets_all_pieces", |b| {
        b.iter(|| {
            let total: usize = board
                .pieces()
                .map(|(coord, _)| legal_targets(&board, &preset.rules, coord).len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_has_legal_move(c: &mut Criterion) {
    let preset = Preset::tablut();
    let board = preset.board().unwrap();

    c.bench_function("has_legal_move_defender", |b| {
        b.iter(|| black_box(has_legal_move(&board, &preset.rules, Side::Defender)))
    });
}

fn bench_apply_capture(c: &mut Criterion) {
    let preset = Preset::tablut();
    let mut start = preset.board().unwrap();
    apply(&mut start, &preset.rules, Side::Attacker, Coord::new(0, 3), Coord::new(2, 3)).unwrap();
    apply(&mut start, &preset.rules, Side::Defender, Coord::new(6, 4), Coord::new(6, 1)).unwrap();

    c.bench_function("apply_capturing_move", |b| {
        b.iter(|| {
            let mut board = start.clone();
            black_box(apply(
                &mut board,
                &preset.rules,
                Side::Attacker,
                Coord::new(0, 5),
                Coord::new(2, 5),
            ))
        })
    });
}

fn bench_session_undo_redo(c: &mut Criterion) {
    let mut session = GameSession::from_preset(&Preset::tablut()).unwrap();
    session.request_move(Coord::new(0, 3), Coord::new(2, 3)).unwrap();
    session.request_move(Coord::new(6, 4), Coord::new(6, 1)).unwrap();
    session.request_move(Coord::new(0, 5), Coord::new(2, 5)).unwrap();

    c.bench_function("session_undo_redo_cycle", |b| {
        b.iter(|| {
            while session.undo().is_ok() {}
            while session.redo().is_ok() {}
            black_box(session.history().current())
        })
    });
}

criterion_group!(
    benches,
    bench_decode_opening,
    bench_encode_opening,
    bench_legal_targets_all,
    bench_has_legal_move,
    bench_apply_capture,
    bench_session_undo_redo,
);
criterion_main!(benches);
