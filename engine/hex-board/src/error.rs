use thiserror::Error;

use crate::coord::Coord;

/// Errors raised by board operations.
///
/// These are caller contract violations: search code only ever plays empty
/// cells that lie on the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Coordinate {coord} is outside a {size}x{size} board")]
    OutOfRange { coord: Coord, size: usize },

    #[error("Cell {0} is already occupied")]
    Occupied(Coord),

    #[error("Cannot place an empty stone")]
    EmptyColor,

    #[error("Board size must be between 1 and {max}, got {size}")]
    InvalidSize { size: usize, max: usize },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid move notation: {0:?}")]
    InvalidNotation(String),

    #[error("Boards differ in {0} cells, expected exactly one new stone")]
    NotOneMoveApart(usize),

    #[error("Board sizes differ: {0} vs {1}")]
    SizeMismatch(usize, usize),
}
