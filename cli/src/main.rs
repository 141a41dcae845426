//! hex - play Hex against an engine, or run engine matches
//!
//! Two subcommands:
//! 1. `play`: a human enters moves on stdin against minimax or MCTS
//! 2. `match`: two engines play a series of games; the tally is logged

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::info;

mod arena;
mod config;
mod play;

use crate::config::{Cli, Command};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;

    init_tracing(&cli.log_level)?;
    info!(log_level = %cli.log_level, "Tracing initialized");

    let config = cli.hex_config();
    match &cli.command {
        Command::Play(args) => {
            let stdin = io::stdin();
            play::run_play(args, &config, stdin.lock(), io::stdout())?;
        }
        Command::Match(args) => {
            let tally = arena::run_match(args, &config)?;
            println!(
                "{} {} - {} {}",
                args.first, tally.first, tally.second, args.second
            );
        }
    }

    Ok(())
}
