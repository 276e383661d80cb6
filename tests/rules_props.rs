use proptest::prelude::*;
use revbot::board::{Board, Cell, Color, Move};

/// Drives a playout from the standard position using `seeds` as move
/// candidates, checking the rules invariants after every applied move.
fn checked_playout(size: usize, seeds: &[(usize, usize)]) {
    let mut board = Board::standard(size);
    let mut color = Color::Black;

    for &(row, col) in seeds {
        if board.is_terminal() {
            break;
        }
        if !board.has_any_move(color) {
            color = color.opponent();
            continue;
        }

        // Enumeration agrees with the validity predicate on every cell.
        let legal = board.legal_moves(color);
        for mv in &legal {
            assert_eq!(board.get(mv.row, mv.col), Cell::Empty);
            assert!(board.is_valid_move(*mv, color));
        }
        for r in 0..size {
            for c in 0..size {
                let mv = Move::new(r, c);
                assert_eq!(
                    legal.contains(&mv),
                    board.get(r, c) == Cell::Empty && board.is_valid_move(mv, color),
                );
            }
        }

        let mv = Move::new(row % size, col % size);
        if !board.is_valid_move(mv, color) {
            continue;
        }

        let before = board.clone();
        board.apply_move(mv, color);

        // Exactly the placed disc plus flipped opponent discs changed, and
        // every flip went to the mover.
        let mut flipped = 0usize;
        for r in 0..size {
            for c in 0..size {
                let old = before.get(r, c);
                let new = board.get(r, c);
                if (r, c) == (mv.row, mv.col) {
                    assert_eq!(old, Cell::Empty);
                    assert_eq!(new, color.cell());
                } else if old != new {
                    assert_eq!(old, color.opponent().cell(), "({r}, {c})");
                    assert_eq!(new, color.cell(), "({r}, {c})");
                    flipped += 1;
                }
            }
        }
        assert!(flipped >= 1, "a legal move must flip at least one disc");
        assert_eq!(
            board.count(color),
            before.count(color) + flipped + 1,
            "mover count grows by flips plus the placed disc"
        );

        color = color.opponent();
    }

    // Terminal is exactly the double-stuck condition.
    assert_eq!(
        board.is_terminal(),
        board.legal_moves(Color::Black).is_empty() && board.legal_moves(Color::White).is_empty()
    );
}

proptest! {
    #[test]
    fn playout_invariants_6(seeds in prop::collection::vec((0usize..6, 0usize..6), 0..40)) {
        checked_playout(6, &seeds);
    }

    #[test]
    fn playout_invariants_8(seeds in prop::collection::vec((0usize..8, 0usize..8), 0..40)) {
        checked_playout(8, &seeds);
    }
}
