//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Board, BoardBuilder, Color, Jump, Piece, Square, CELLS};

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        Just(Piece::man(Color::White)),
        Just(Piece::crown(Color::White)),
        Just(Piece::man(Color::Black)),
        Just(Piece::crown(Color::Black)),
    ]
}

fn cell_strategy() -> impl Strategy<Value = Option<Piece>> {
    prop_oneof![
        3 => Just(None),
        2 => piece_strategy().prop_map(Some),
    ]
}

/// Strategy producing an arbitrary (not necessarily reachable) board
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell_strategy(), CELLS).prop_map(|cells| {
        let mut builder = BoardBuilder::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if let Some(piece) = cell {
                builder = builder.piece(Square(index as u8), piece.color, piece.kind);
            }
        }
        builder.build()
    })
}

fn rotate(sq: Square) -> Square {
    Square(31 - sq.0)
}

fn rotate_board(board: &Board) -> Board {
    let mut builder = BoardBuilder::new();
    for sq in Square::all() {
        if let Some(piece) = board.piece_at(sq) {
            builder = builder.piece(rotate(sq), piece.color, piece.kind);
        }
    }
    builder.build()
}

proptest! {
    /// Property: simple-move targets are always in-bounds empty cells one
    /// row away from the source.
    #[test]
    fn prop_simple_targets_are_empty_adjacent_cells(board in board_strategy()) {
        for sq in Square::all() {
            for color in Color::BOTH {
                for target in board.simple_moves(sq, color) {
                    prop_assert!(target.as_index() < CELLS);
                    prop_assert!(board.is_empty_cell(target));
                    prop_assert_eq!(target.row().abs_diff(sq.row()), 1);
                }
            }
        }
    }

    /// Property: every generated jump crosses a live opponent piece and
    /// lands two rows away on an empty cell.
    #[test]
    fn prop_jumps_cross_live_opponents(board in board_strategy()) {
        for sq in Square::all() {
            for color in Color::BOTH {
                for jump in board.jump_moves(sq, color) {
                    prop_assert!(board.is_empty_cell(jump.landing));
                    prop_assert_eq!(jump.landing.row().abs_diff(sq.row()), 2);
                    prop_assert_eq!(jump.captured.row().abs_diff(sq.row()), 1);
                    match board.piece_at(jump.captured) {
                        Some(captured) => prop_assert_ne!(captured.color, color),
                        None => prop_assert!(false, "jump over empty cell at {}", jump.captured),
                    }
                }
            }
        }
    }

    /// Property: rotating the board by 180 degrees swaps the up and down
    /// generators; edge exclusions must agree across row parities.
    #[test]
    fn prop_rotation_symmetry(board in board_strategy()) {
        let rotated = rotate_board(&board);
        for sq in Square::all() {
            let mut up: Vec<Square> = board.steps_up(sq).into_iter().map(rotate).collect();
            let mut down = rotated.steps_down(rotate(sq));
            up.sort();
            down.sort();
            prop_assert_eq!(up, down);

            let mut up_jumps: Vec<Jump> = board
                .jumps_up(sq)
                .into_iter()
                .map(|jump| Jump::new(rotate(jump.captured), rotate(jump.landing)))
                .collect();
            let mut down_jumps = rotated.jumps_down(rotate(sq));
            up_jumps.sort_by_key(|jump| jump.landing);
            down_jumps.sort_by_key(|jump| jump.landing);
            prop_assert_eq!(up_jumps, down_jumps);
        }
    }
}

/// Random playouts: drive the generators with the mandatory-capture and
/// continuation rules and check the board never drifts out of shape.
#[test]
fn test_random_playouts_preserve_invariants() {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(0xC4EC);

    for _ in 0..40 {
        let mut board = Board::new();
        let mut to_move = Color::White;
        let (mut white, mut black) = board.tally();
        assert_eq!((white, black), (12, 12));

        for _ply in 0..200 {
            let jumps: Vec<(Square, Jump)> = Square::all()
                .flat_map(|sq| {
                    board
                        .jump_moves(sq, to_move)
                        .into_iter()
                        .map(move |jump| (sq, jump))
                })
                .collect();

            if jumps.is_empty() {
                let simples: Vec<(Square, Square)> = Square::all()
                    .flat_map(|sq| {
                        board
                            .simple_moves(sq, to_move)
                            .into_iter()
                            .map(move |target| (sq, target))
                    })
                    .collect();
                if simples.is_empty() {
                    break;
                }
                let (from, target) = simples[rng.gen_range(0..simples.len())];
                let piece = board.piece_at(from).unwrap();
                board.set_cell(from, None);
                board.set_cell(target, Some(piece));
                to_move = to_move.opponent();
            } else {
                let (from, jump) = jumps[rng.gen_range(0..jumps.len())];
                let piece = board.piece_at(from).unwrap();
                board.set_cell(from, None);
                board.set_cell(jump.captured, None);
                board.set_cell(jump.landing, Some(piece));
                match piece.color.opponent() {
                    Color::White => white -= 1,
                    Color::Black => black -= 1,
                }
                if board.jump_moves(jump.landing, to_move).is_empty() {
                    to_move = to_move.opponent();
                }
            }

            assert_eq!(board.tally(), (white, black));
            if white == 0 || black == 0 {
                assert!(board.outcome().is_some());
                break;
            }
            assert_eq!(board.outcome(), None);
        }
    }
}
