//! Property tests for board invariants under arbitrary move sequences

use noughts::tictactoe::{Board, Cell, Player};
use proptest::prelude::*;

/// A board size and a list of (row, col) attempts, some of them off-board
fn size_and_moves() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..=5).prop_flat_map(|size| {
        let coord = 0..size + 1;
        (
            Just(size),
            prop::collection::vec((coord.clone(), coord), 0..40),
        )
    })
}

fn count(board: &Board, cell: Cell) -> usize {
    let n = board.size();
    (0..n)
        .flat_map(|r| (0..n).map(move |c| (r, c)))
        .filter(|&(r, c)| board.get(r, c) == Some(cell))
        .count()
}

proptest! {
    #[test]
    fn move_count_matches_pieces((size, moves) in size_and_moves()) {
        let mut board = Board::new(size).unwrap();
        for (row, col) in moves {
            let _ = board.place(row, col);
            let x = count(&board, Cell::X);
            let o = count(&board, Cell::O);
            prop_assert_eq!(board.move_count(), x + o);
            prop_assert!(x == o || x == o + 1);
        }
    }

    #[test]
    fn rejected_moves_change_nothing((size, moves) in size_and_moves()) {
        let mut board = Board::new(size).unwrap();
        for (row, col) in moves {
            let before = board.clone();
            let legal = board.is_legal_move(row, col);
            let placed = board.place(row, col);
            prop_assert_eq!(legal, placed);
            if placed {
                prop_assert_eq!(board.current_player(), before.current_player().opponent());
                prop_assert_eq!(board.get(row, col), Some(before.current_player().to_cell()));
                prop_assert_eq!(board.move_count(), before.move_count() + 1);
            } else {
                prop_assert_eq!(&board, &before);
            }
        }
    }

    #[test]
    fn outcome_flags_are_consistent((size, moves) in size_and_moves()) {
        let mut board = Board::new(size).unwrap();
        for (row, col) in moves {
            // Stop at the first finished position, as a game would
            if board.is_finished() {
                break;
            }
            let _ = board.place(row, col);

            let x_won = board.has_won(Player::X);
            let o_won = board.has_won(Player::O);
            prop_assert!(!(x_won && o_won));

            let full = board.move_count() == size * size;
            prop_assert_eq!(board.is_draw(), full && !x_won && !o_won);
            prop_assert_eq!(board.is_finished(), x_won || o_won || full);
            prop_assert_eq!(board.legal_moves().len(), size * size - board.move_count());
        }
    }

    #[test]
    fn clones_are_independent((size, moves) in size_and_moves()) {
        let mut board = Board::new(size).unwrap();
        for (row, col) in moves {
            let _ = board.place(row, col);
        }
        let snapshot = board.clone();
        if let Some(mv) = board.legal_moves().first().copied() {
            let mut child = board.clone();
            prop_assert!(child.place(mv.row, mv.col));
            prop_assert_eq!(&board, &snapshot);
            prop_assert_ne!(&child, &board);
        }
    }

    #[test]
    fn encoding_reparses((size, moves) in size_and_moves()) {
        let mut board = Board::new(size).unwrap();
        for (row, col) in moves {
            let _ = board.place(row, col);
        }
        let parsed = Board::from_string(&board.encode()).unwrap();
        prop_assert_eq!(parsed.encode(), board.encode());
        prop_assert_eq!(parsed.current_player(), board.current_player());
        prop_assert_eq!(parsed.move_count(), board.move_count());
    }
}
