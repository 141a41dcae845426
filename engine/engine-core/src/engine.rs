//! The move-picking contract.

use hex_board::{Board, Color, Coord};

use crate::error::EngineError;

/// Something that picks a move.
///
/// Engines never mutate the caller's board; they search copies of it. An
/// engine may keep state between calls (random number generator, counters)
/// but no search tree.
pub trait Engine: Send {
    /// Short human-readable name used in logs.
    fn name(&self) -> &str;

    /// Choose a move for `color` on `board`.
    fn get_next_move(&mut self, board: &Board, color: Color) -> Result<Coord, EngineError>;
}

/// Reject requests no engine can answer: an empty color, a decided game, or a
/// board without empty cells.
pub fn validate_request(board: &Board, color: Color) -> Result<(), EngineError> {
    if !color.is_player() {
        return Err(EngineError::InvalidColor(color));
    }
    if let Some(winner) = board.winner() {
        return Err(EngineError::TerminalBoard(winner));
    }
    if board.is_full() {
        return Err(EngineError::NoLegalMoves);
    }
    Ok(())
}
