use crate::board::{Board, Color, Move};
use crate::search::eval::Evaluator;
use crate::search::weights::ScoreTable;
use std::time::{Duration, Instant};

/// Internal per-move budget, kept inside the runner's 5 s external limit so
/// the final deadline poll and call overhead still fit.
pub const MOVE_BUDGET: Duration = Duration::from_millis(4980);

/// The wall clock ran out somewhere inside the search tree. Propagated with
/// `?` so the whole in-flight iteration unwinds; the driver then discards it.
/// A cancelled subtree therefore never contributes a value to anything the
/// caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expired;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Wall-clock budget for the whole decision.
    pub movetime: Duration,
    /// Stop deepening at this limit; `None` runs until the clock ends it.
    pub max_depth: Option<u32>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            movetime: MOVE_BUDGET,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub value: f64,
    /// Deepest fully completed depth limit.
    pub depth: u32,
    pub nodes: u64,
}

/// Depth-limited alpha-beta over the rules engine, driven by iterative
/// deepening. One `Searcher` serves one decision; it is not reentrant.
pub struct Searcher<'a> {
    eval: Evaluator<'a>,
    deadline: Instant,
    depth_limit: u32,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(table: &'a ScoreTable, color: Color, opponent: Color, moves_played: u32) -> Self {
        Self {
            eval: Evaluator {
                table,
                color,
                opponent,
                moves_played,
            },
            deadline: Instant::now(),
            depth_limit: 1,
            nodes: 0,
        }
    }

    fn times_up(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Iterative-deepening driver: alpha-beta at depth limits 1, 2, 3, …
    /// until the budget runs out. An iteration counts only if the deadline
    /// had not passed by the time it returned; the answer is pre-seeded with
    /// the first legal move so a decision exists even when the depth-1 pass
    /// cannot finish.
    pub fn run(&mut self, board: &Board, params: SearchParams) -> SearchResult {
        self.deadline = Instant::now() + params.movetime;
        let roots = board.legal_moves(self.eval.color);
        let Some(&fallback) = roots.first() else {
            return SearchResult {
                best: None,
                value: 0.0,
                depth: 0,
                nodes: 0,
            };
        };

        let mut best = fallback;
        let mut value = f64::NEG_INFINITY;
        let mut completed = 0u32;
        let mut limit = 1u32;
        loop {
            self.depth_limit = limit;
            let Ok((mv, val)) = self.search_root(board, &roots) else {
                break;
            };
            if self.times_up() {
                break;
            }
            best = mv;
            value = val;
            completed = limit;
            log::debug!(
                "depth {limit} complete: best {best} value {value:.2} ({} nodes)",
                self.nodes
            );
            if params.max_depth.is_some_and(|d| limit >= d) {
                break;
            }
            if limit as usize >= board.area() {
                // Deeper than the remaining plies cannot change the result.
                break;
            }
            limit += 1;
        }

        SearchResult {
            best: Some(best),
            value,
            depth: completed,
            nodes: self.nodes,
        }
    }

    /// One full-window pass over the root moves. The root never narrows the
    /// (alpha, beta) bracket, and a candidate replaces the incumbent on
    /// `>=`, so among equal-valued moves the last one in row-major order
    /// wins.
    fn search_root(&mut self, board: &Board, roots: &[Move]) -> Result<(Move, f64), Expired> {
        let mut best_val = f64::NEG_INFINITY;
        let mut best_move = roots[0];
        for &mv in roots {
            let mut child = board.clone();
            child.apply_move(mv, self.eval.color);
            let value = self.min_value(&child, f64::NEG_INFINITY, f64::INFINITY, 1)?;
            if value >= best_val {
                best_val = value;
                best_move = mv;
            }
        }
        Ok((best_move, best_val))
    }

    /// Maximizing node: the agent is to move. `depth` counts plies from the
    /// root and is passed by value; children search at `depth + 1`.
    fn max_value(
        &mut self,
        board: &Board,
        mut alpha: f64,
        beta: f64,
        depth: u32,
    ) -> Result<f64, Expired> {
        self.nodes += 1;
        if board.is_terminal() || depth >= self.depth_limit {
            return Ok(self.eval.utility(board, self.eval.color, depth));
        }
        if self.times_up() {
            return Err(Expired);
        }
        let mut value = f64::NEG_INFINITY;
        for mv in board.legal_moves(self.eval.color) {
            let mut child = board.clone();
            child.apply_move(mv, self.eval.color);
            value = value.max(self.min_value(&child, alpha, beta, depth + 1)?);
            alpha = alpha.max(value);
            if beta <= alpha {
                return Ok(value);
            }
        }
        // A side with no moves falls through with the untouched accumulator;
        // pass handling belongs to the runner, not the search.
        Ok(value)
    }

    /// Minimizing node: the opponent is to move.
    fn min_value(
        &mut self,
        board: &Board,
        alpha: f64,
        mut beta: f64,
        depth: u32,
    ) -> Result<f64, Expired> {
        self.nodes += 1;
        if board.is_terminal() || depth >= self.depth_limit {
            return Ok(self.eval.utility(board, self.eval.opponent, depth));
        }
        if self.times_up() {
            return Err(Expired);
        }
        let mut value = f64::INFINITY;
        for mv in board.legal_moves(self.eval.opponent) {
            let mut child = board.clone();
            child.apply_move(mv, self.eval.opponent);
            value = value.min(self.max_value(&child, alpha, beta, depth + 1)?);
            beta = beta.min(value);
            if beta <= alpha {
                return Ok(value);
            }
        }
        Ok(value)
    }
}
