//! Engine against engine over several games.

use anyhow::Result;
use engine_config::HexConfig;
use hex_board::Color;
use hex_engines::{self_play, EngineSpec, MatchTally};
use std::time::Instant;
use tracing::info;

use crate::config::MatchArgs;

/// Play `args.games` games and return the wins per engine.
pub fn run_match(args: &MatchArgs, config: &HexConfig) -> Result<MatchTally> {
    let first = EngineSpec::from_config(args.first, config)?;
    let second = EngineSpec::from_config(args.second, config)?;

    info!(
        first = %args.first,
        second = %args.second,
        games = args.games,
        size = args.size,
        swap = args.swap,
        "Starting match"
    );

    let mut tally = MatchTally::default();
    for game in 0..args.games {
        let first_color = if args.swap && game % 2 == 1 {
            Color::Blue
        } else {
            Color::Red
        };

        let start = Instant::now();
        let mut first_engine = first.build();
        let mut second_engine = second.build();
        let record = if first_color == Color::Red {
            self_play(&mut first_engine, &mut second_engine, args.size)?
        } else {
            self_play(&mut second_engine, &mut first_engine, args.size)?
        };
        tally.record(&record, first_color);

        info!(
            game = game + 1,
            winner = %record.winner,
            first_color = %first_color,
            plies = record.moves.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Game complete"
        );
    }

    info!(
        first = %args.first,
        first_wins = tally.first,
        second = %args.second,
        second_wins = tally.second,
        "Match complete"
    );
    Ok(tally)
}
