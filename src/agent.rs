use crate::board::{Board, Color, Move};
use crate::search::alphabeta::{SearchParams, Searcher, MOVE_BUDGET};
use crate::search::weights::{ConfigError, ScoreTable};
use std::time::Duration;

/// The playing agent: colors fixed at construction, a score table matching
/// the board size, and the running move counter that drives phase
/// estimation. One decision at a time: a `choose_move` call must finish
/// before the next starts.
pub struct Agent {
    color: Color,
    opponent: Color,
    table: ScoreTable,
    moves_played: u32,
    movetime: Duration,
}

impl Agent {
    /// Fails for board sizes without a score-table family (anything but
    /// 6, 8 or 10).
    pub fn new(color: Color, opponent: Color, board_size: usize) -> Result<Self, ConfigError> {
        let table = ScoreTable::for_size(board_size)?;
        Ok(Self {
            color,
            opponent,
            table,
            // The four discs of the starting position count as played.
            moves_played: 4,
            movetime: MOVE_BUDGET,
        })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn board_size(&self) -> usize {
        self.table.size()
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// For runners on a different clock than the default 4.98 s budget.
    pub fn set_movetime(&mut self, movetime: Duration) {
        self.movetime = movetime;
    }

    /// The decision entry point: searches within the time budget and returns
    /// the best move found, or `None` when the agent has no legal move (the
    /// runner handles passing).
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.choose_move_with(
            board,
            SearchParams {
                movetime: self.movetime,
                max_depth: None,
            },
        )
    }

    /// [`choose_move`](Self::choose_move) with explicit parameters, for
    /// fixed-depth play and tests.
    pub fn choose_move_with(&mut self, board: &Board, params: SearchParams) -> Option<Move> {
        let mut searcher = Searcher::new(&self.table, self.color, self.opponent, self.moves_played);
        let result = searcher.run(board, params);
        // One move per side per round.
        self.moves_played += 2;
        result.best
    }

    /// Runner-side move application between the agent's turns; same flip
    /// semantics as the search uses internally.
    pub fn play_move(&self, board: &mut Board, mv: Move, color: Color) {
        board.apply_move(mv, color);
    }
}
