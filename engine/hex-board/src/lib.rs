//! Hex board representation for the search engines
//!
//! Hex is a two-player connection game on an N×N rhombus of hexagonal cells.
//! Red tries to connect the top row to the bottom row, Blue the left column to
//! the right column. Cells are never emptied again once played, and a full
//! board always has exactly one winner, so the game cannot end in a draw.
//!
//! # Board Layout
//!
//! Cells are stored in row-major order. Each row is drawn one step further to
//! the right, which is what makes the square grid a rhombus of hexagons:
//! ```text
//!     0 1 2
//! a   . . .        Red:  row a  -> row c
//!  b   . . .       Blue: col 0  -> col 2
//!   c   . . .
//! ```
//!
//! A cell `(r, c)` touches `(r-1, c)`, `(r+1, c)`, `(r, c-1)`, `(r, c+1)`,
//! `(r-1, c+1)` and `(r+1, c-1)`.
//!
//! # Usage
//!
//! ```rust
//! use hex_board::{Board, Color, Coord};
//!
//! let board = Board::new(3).unwrap();
//! let board = board.make_move("b1".parse::<Coord>().unwrap(), Color::Red).unwrap();
//! assert_eq!(board.winner(), None);
//! assert_eq!(board.possible_moves().len(), 8);
//! ```

mod board;
mod color;
mod coord;
mod error;

pub use board::{Board, MAX_SIZE};
pub use color::{reward, Color};
pub use coord::Coord;
pub use error::BoardError;

#[cfg(test)]
mod tests;
