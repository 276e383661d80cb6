use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported board size {0}: score tables exist for 6, 8 and 10")]
    UnsupportedBoardSize(usize),
}

/// Positional weight matrix for one board size, with its precomputed
/// normalization denominator and the early-phase move cutoff. Immutable
/// after construction.
#[derive(Debug)]
pub struct ScoreTable {
    size: usize,
    weights: Vec<i32>,
    abs_sum: i32,
    early_moves: f64,
}

const WEIGHTS_6: [[i32; 6]; 6] = [
    [10, -6, 2, 2, -6, 10],
    [-6, -8, 0, 0, -8, -6],
    [2, 0, 1, 1, 0, 2],
    [2, 0, 1, 1, 0, 2],
    [-6, -8, 0, 0, -8, -6],
    [10, -6, 2, 2, -6, 10],
];

const WEIGHTS_8: [[i32; 8]; 8] = [
    [10, -6, 4, 2, 2, 4, -6, 10],
    [-6, -8, -1, 0, 0, -1, -8, -6],
    [4, -1, 1, 0, 0, 1, -1, 4],
    [2, 0, 0, 1, 1, 0, 0, 2],
    [2, 0, 0, 1, 1, 0, 0, 2],
    [4, -1, 1, 0, 0, 1, -1, 4],
    [-6, -8, -1, 0, 0, -1, -8, -6],
    [10, -6, 4, 2, 2, 4, -6, 10],
];

const WEIGHTS_10: [[i32; 10]; 10] = [
    [10, -6, 4, 2, 2, 2, 2, 4, -6, 10],
    [-6, -8, -2, -1, -1, -1, -1, -2, -8, -6],
    [4, -2, 0, 2, 2, 2, 2, 0, -2, 4],
    [2, -1, 2, 0, 1, 1, 0, 2, -1, 2],
    [2, -1, 2, 1, 1, 1, 1, 2, -1, 2],
    [2, -1, 2, 1, 1, 1, 1, 2, -1, 2],
    [2, -1, 2, 0, 1, 1, 0, 2, -1, 2],
    [4, -2, 0, 2, 2, 2, 2, 0, -2, 4],
    [-6, -8, -2, -1, -1, -1, -1, -2, -8, -6],
    [10, -6, 4, 2, 2, 2, 2, 4, -6, 10],
];

// Early-phase cutoffs: the literal per-size values of (n^2 - (n-1)^2)^2 / 10.
// Empirically tuned constants, not a formula to re-derive.
const EARLY_MOVES_6: f64 = 12.1;
const EARLY_MOVES_8: f64 = 22.5;
const EARLY_MOVES_10: f64 = 36.1;

impl ScoreTable {
    /// Selects the weight family for a board size. Anything but 6, 8 or 10
    /// is a fatal configuration error: the engine must not search without a
    /// matching table.
    pub fn for_size(size: usize) -> Result<Self, ConfigError> {
        match size {
            6 => Ok(Self::from_rows(&WEIGHTS_6, EARLY_MOVES_6)),
            8 => Ok(Self::from_rows(&WEIGHTS_8, EARLY_MOVES_8)),
            10 => Ok(Self::from_rows(&WEIGHTS_10, EARLY_MOVES_10)),
            other => Err(ConfigError::UnsupportedBoardSize(other)),
        }
    }

    fn from_rows<const N: usize>(rows: &[[i32; N]; N], early_moves: f64) -> Self {
        let weights: Vec<i32> = rows.iter().flatten().copied().collect();
        let abs_sum = weights.iter().map(|w| w.abs()).sum();
        Self {
            size: N,
            weights,
            abs_sum,
            early_moves,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn weight(&self, row: usize, col: usize) -> i32 {
        self.weights[row * self.size + col]
    }

    /// Sum of absolute weights; normalizes the positional score into
    /// [-100, 100].
    pub fn abs_sum(&self) -> i32 {
        self.abs_sum
    }

    /// Moves-played threshold below which the position counts as early game.
    pub fn early_moves(&self) -> f64 {
        self.early_moves
    }
}
