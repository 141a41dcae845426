//! Heuristic evaluation of Hex positions.
//!
//! An evaluator scores a board for one side: higher is better for that side.
//! Decided games score [`WIN_SCORE`] or `-WIN_SCORE`, which dominates every
//! heuristic value. Open positions are scored by one of:
//!
//! - **Shortest path** ([`PathAlgorithm::Dijkstra`] or [`PathAlgorithm::AStar`]):
//!   how many more stones each side needs to join its borders. Own stones are
//!   free, empty cells cost one, opponent stones block. The score is
//!   `-(own_cost - opponent_cost)`, so it is symmetric between the players and
//!   can be negated to switch perspective.
//! - **Random**: a uniform value in `[-1, 1)`, a weak baseline opponent.
//!
//! # Usage
//!
//! ```rust
//! use hex_board::{Board, Color, Coord};
//! use hex_eval::Evaluator;
//!
//! let board = Board::new(3).unwrap().make_move(Coord::new(1, 1), Color::Red).unwrap();
//! let mut evaluator = Evaluator::dijkstra();
//! assert_eq!(evaluator.evaluate(&board, Color::Red), 1.0);
//! assert_eq!(evaluator.evaluate(&board, Color::Blue), -1.0);
//! ```

mod evaluator;
mod path;

pub use evaluator::{Evaluator, EvaluatorError, EvaluatorKind, RandomEvaluator, WIN_SCORE};
pub use path::{shortest_path_cost, PathAlgorithm};
