pub mod agent;
pub mod board;
pub mod search;

// Re-exports kept minimal: the agent facade and the core board types.
pub use agent::Agent;
pub use board::{Board, Cell, Color, Move};
