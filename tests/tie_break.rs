use revbot::board::{Board, Color, Move};
use revbot::search::alphabeta::{SearchParams, Searcher};
use revbot::search::weights::ScoreTable;
use std::time::Duration;

fn fixed_depth(limit: u32) -> SearchParams {
    SearchParams {
        movetime: Duration::from_secs(3600),
        max_depth: Some(limit),
    }
}

// The standard opening is symmetric under 180-degree rotation and under
// transposition, and the weight tables share those symmetries, so all four
// opening moves evaluate identically at depth 1. Equal values must resolve
// to the move latest in row-major order.

#[test]
fn equal_opening_moves_resolve_to_the_highest_row_major() {
    let table = ScoreTable::for_size(6).unwrap();
    let board = Board::standard(6);
    assert_eq!(
        board.legal_moves(Color::Black),
        vec![
            Move::new(1, 2),
            Move::new(2, 1),
            Move::new(3, 4),
            Move::new(4, 3)
        ]
    );
    let mut searcher = Searcher::new(&table, Color::Black, Color::White, 4);
    let result = searcher.run(&board, fixed_depth(1));
    assert_eq!(result.best, Some(Move::new(4, 3)));
}

#[test]
fn equal_opening_moves_resolve_to_the_highest_row_major_8() {
    let table = ScoreTable::for_size(8).unwrap();
    let board = Board::standard(8);
    let mut searcher = Searcher::new(&table, Color::Black, Color::White, 4);
    let result = searcher.run(&board, fixed_depth(1));
    assert_eq!(result.best, Some(Move::new(5, 4)));
}

#[test]
fn white_ties_break_the_same_way() {
    let table = ScoreTable::for_size(6).unwrap();
    let board = Board::standard(6);
    let legal = board.legal_moves(Color::White);
    let mut searcher = Searcher::new(&table, Color::White, Color::Black, 4);
    let result = searcher.run(&board, fixed_depth(1));
    assert_eq!(result.best, Some(*legal.last().unwrap()));
}
