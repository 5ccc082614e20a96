//! Benchmarks for checkers engine performance.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use checkers_engine::board::{
    verify_move, Board, BoardBuilder, Color, Kind, Operation, Piece, Snapshot, Square, Submission,
};

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos_simple", |b| {
        b.iter(|| {
            Square::all()
                .map(|sq| black_box(&startpos).simple_moves(sq, Color::White).len())
                .sum::<usize>()
        })
    });

    // Scattered midgame position with several jumps on the board
    let midgame = BoardBuilder::new()
        .piece(Square(5), Color::Black, Kind::Man)
        .piece(Square(9), Color::Black, Kind::Man)
        .piece(Square(10), Color::Black, Kind::Crown)
        .piece(Square(14), Color::Black, Kind::Man)
        .piece(Square(13), Color::White, Kind::Man)
        .piece(Square(18), Color::White, Kind::Man)
        .piece(Square(21), Color::White, Kind::Crown)
        .piece(Square(26), Color::White, Kind::Man)
        .build();
    group.bench_function("midgame_jumps", |b| {
        b.iter(|| {
            Square::all()
                .map(|sq| black_box(&midgame).jump_moves(sq, Color::White).len())
                .sum::<usize>()
        })
    });

    group.bench_function("mandatory_capture_scan", |b| {
        b.iter(|| black_box(&midgame).color_has_jump(black_box(Color::White)))
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let simple = Submission {
        state_before: Snapshot::from(&Board::new()),
        operations: vec![
            Operation::set_cell(20, None),
            Operation::set_cell(16, Some(Piece::man(Color::White))),
            Operation::set_turn(Color::Black),
        ],
        turn_before: Color::White,
        turn_after: Color::Black,
    };
    group.bench_function("simple_move", |b| {
        b.iter(|| verify_move(black_box(&simple)).unwrap())
    });

    let jump_board = BoardBuilder::new()
        .piece(Square(13), Color::White, Kind::Man)
        .piece(Square(9), Color::Black, Kind::Man)
        .piece(Square(28), Color::Black, Kind::Man)
        .build();
    let jump = Submission {
        state_before: Snapshot::from(&jump_board),
        operations: vec![
            Operation::set_cell(13, None),
            Operation::set_cell(9, None),
            Operation::set_cell(4, Some(Piece::man(Color::White))),
            Operation::set_turn(Color::Black),
        ],
        turn_before: Color::White,
        turn_after: Color::Black,
    };
    group.bench_function("jump_move", |b| {
        b.iter(|| verify_move(black_box(&jump)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_validation);
criterion_main!(benches);
