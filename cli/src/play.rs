//! Human against engine on the terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use engine_config::HexConfig;
use engine_core::Engine;
use hex_board::{Board, Color, Coord};
use hex_engines::EngineSpec;
use tracing::{debug, info};

use crate::config::PlayArgs;

/// Run one game, reading the human's moves from `input`.
///
/// Returns the winner, or `None` if the human quit or input ran out.
pub fn run_play<R: BufRead, W: Write>(
    args: &PlayArgs,
    config: &HexConfig,
    mut input: R,
    mut output: W,
) -> Result<Option<Color>> {
    let spec = EngineSpec::from_config(args.engine, config)?;
    let mut engine = spec.build();
    let mut board = Board::new(args.size)?;
    let engine_color = args.human.opposite();

    info!(
        engine = engine.name(),
        human = %args.human,
        size = args.size,
        "Starting game"
    );
    writeln!(
        output,
        "You are {}. Enter moves like \"c3\" (row letter, column number), \"quit\" to stop.",
        args.human
    )?;

    let mut to_move = Color::Red;
    loop {
        writeln!(output, "\n{board}")?;
        if let Some(winner) = board.winner() {
            let verdict = if winner == args.human { "You win" } else { "Engine wins" };
            writeln!(output, "{winner} wins. {verdict}!")?;
            info!(winner = %winner, "Game over");
            return Ok(Some(winner));
        }

        if to_move == engine_color {
            let mv = engine
                .get_next_move(&board, engine_color)
                .context("engine failed to move")?;
            board.place(mv, engine_color)?;
            writeln!(output, "{} plays {mv}", engine.name())?;
        } else {
            let Some(mv) = read_move(&board, &mut input, &mut output)? else {
                info!("Game abandoned");
                return Ok(None);
            };
            board.place(mv, args.human)?;
            debug!(mv = %mv, "Human move");
        }
        to_move = to_move.opposite();
    }
}

/// Prompt until a legal move is entered. `None` on quit or end of input.
fn read_move<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Coord>> {
    let mut line = String::new();
    loop {
        write!(output, "Your move: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match text.parse::<Coord>() {
            Ok(mv) => match board.is_empty(mv) {
                Ok(true) => return Ok(Some(mv)),
                Ok(false) => writeln!(output, "{mv} is already taken")?,
                Err(err) => writeln!(output, "{err}")?,
            },
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
