//! Engine-vs-engine games.

use engine_core::{Engine, EngineError};
use hex_board::{Board, Color, Coord};
use tracing::{debug, trace};

use crate::AnyEngine;

/// Outcome of one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub size: usize,
    pub winner: Color,
    /// Moves in play order, Red first.
    pub moves: Vec<(Color, Coord)>,
}

/// Play one game to completion, Red moving first.
///
/// A single board is updated in place. Hex cannot end in a draw, so the
/// game always has a winner by the time the board fills.
pub fn self_play(
    red: &mut AnyEngine,
    blue: &mut AnyEngine,
    size: usize,
) -> Result<GameRecord, EngineError> {
    let mut board = Board::new(size)?;
    let mut moves = Vec::with_capacity(size * size);
    let mut to_move = Color::Red;

    let winner = loop {
        if let Some(winner) = board.winner() {
            break winner;
        }
        let engine = if to_move == Color::Blue {
            &mut *blue
        } else {
            &mut *red
        };
        let mv = engine.get_next_move(&board, to_move)?;
        board.place(mv, to_move)?;
        trace!(
            ply = moves.len() + 1,
            color = %to_move,
            engine = engine.name(),
            mv = %mv,
            "Move played"
        );
        moves.push((to_move, mv));
        to_move = to_move.opposite();
    };

    debug!(
        size,
        winner = %winner,
        plies = moves.len(),
        red = red.name(),
        blue = blue.name(),
        "Game finished"
    );

    Ok(GameRecord {
        size,
        winner,
        moves,
    })
}

/// Wins per engine across a match where the engines may swap colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub first: u32,
    pub second: u32,
}

impl MatchTally {
    /// Credit a game to whichever engine held the winning colour.
    pub fn record(&mut self, record: &GameRecord, first_color: Color) {
        if record.winner == first_color {
            self.first += 1;
        } else {
            self.second += 1;
        }
    }

    pub fn games(&self) -> u32 {
        self.first + self.second
    }
}
