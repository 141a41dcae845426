//! Depth- or time-bounded alpha-beta search for Hex.
//!
//! The search is written in negamax form: every node is scored from the point
//! of view of the side to move, child scores are negated and the window
//! `(alpha, beta)` becomes `(-beta, -alpha)` one ply down. Leaves (remaining
//! depth zero or a decided game) are scored by a [`hex_eval::Evaluator`].
//!
//! # Budgets
//!
//! - [`MinimaxBudget::Depth`]: one search to a fixed depth.
//! - [`MinimaxBudget::TimeLimit`]: iterative deepening from depth 1. A pass
//!   that runs past the deadline is thrown away and the last completed pass
//!   answers. Depth 1 always completes.
//!
//! # Transposition table
//!
//! Results are cached per engine under (position hash, side to move,
//! remaining depth) together with the kind of bound they represent, so a
//! cached value is only reused where the current window allows it.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Engine;
//! use hex_board::{Board, Color};
//! use hex_eval::Evaluator;
//! use minimax::{MinimaxConfig, MinimaxEngine};
//!
//! let mut engine = MinimaxEngine::new(MinimaxConfig::default().with_depth(2), Evaluator::dijkstra());
//! let board = Board::new(4).unwrap();
//! let mv = engine.get_next_move(&board, Color::Red).unwrap();
//! assert!(board.is_empty(mv).unwrap());
//! ```

pub mod config;
pub mod search;
pub mod transposition;

pub use config::{MinimaxBudget, MinimaxConfig};
pub use search::{full_minimax, MinimaxEngine, SearchOutcome, SearchStats};
pub use transposition::{Bound, TranspositionTable, TtEntry};

#[cfg(test)]
mod tests;
