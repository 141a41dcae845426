use hex_board::{BoardError, Color};
use thiserror::Error;

/// Errors returned when an engine cannot answer a move request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Invalid color to move: {0}")]
    InvalidColor(Color),

    #[error("Game is already over: {0} has won")]
    TerminalBoard(Color),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error(transparent)]
    Board(#[from] BoardError),
}
