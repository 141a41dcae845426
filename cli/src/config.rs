//! Command line for the `hex` binary.
//!
//! Defaults come from config.toml (with `HEX_*` environment overrides);
//! command line flags take priority over both.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use engine_config::{load_config, HexConfig};
use hex_board::Color;
use hex_engines::EngineKind;
use once_cell::sync::Lazy;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

// Load config once at startup
static HEX_CONFIG: Lazy<HexConfig> = Lazy::new(load_config);

fn default_log_level() -> String {
    HEX_CONFIG.common.log_level.clone()
}

fn default_board_size() -> usize {
    HEX_CONFIG.common.board_size
}

#[derive(Parser, Debug, Clone)]
#[command(name = "hex")]
#[command(about = "Hex engines: minimax with alpha-beta and Monte Carlo tree search")]
#[command(
    long_about = "Play Hex against a computer engine or pit two engines against each other.

Configuration is loaded from config.toml with HEX_<SECTION>_<KEY> environment
overrides. Command line arguments take highest priority."
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value_t = default_log_level())]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play against an engine from the terminal, entering moves like "c3"
    Play(PlayArgs),
    /// Play engine against engine and report the tally
    Match(MatchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Engine to play against (minimax or mcts)
    #[arg(long, default_value = "minimax")]
    pub engine: EngineKind,

    /// Colour the human plays; Red moves first
    #[arg(long, default_value = "blue", value_parser = parse_player)]
    pub human: Color,

    /// Board size (side length)
    #[arg(long, default_value_t = default_board_size())]
    pub size: usize,

    #[command(flatten)]
    pub overrides: EngineOverrides,
}

#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Engine playing Red in the first game
    #[arg(long, default_value = "minimax")]
    pub first: EngineKind,

    /// Engine playing Blue in the first game
    #[arg(long, default_value = "mcts")]
    pub second: EngineKind,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    pub games: u32,

    /// Alternate colours between games
    #[arg(long)]
    pub swap: bool,

    /// Board size (side length)
    #[arg(long, default_value_t = default_board_size())]
    pub size: usize,

    #[command(flatten)]
    pub overrides: EngineOverrides,
}

/// Engine settings that replace the configured ones when given.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineOverrides {
    /// Minimax search depth in plies
    #[arg(long)]
    pub depth: Option<u32>,

    /// Per-move time limit in seconds (replaces depth/iterations unless those are also given)
    #[arg(long, allow_negative_numbers = true)]
    pub time_limit: Option<f64>,

    /// MCTS iterations per move
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Minimax evaluator (dijkstra, astar, random)
    #[arg(long)]
    pub evaluator: Option<String>,

    /// Disable the minimax transposition table
    #[arg(long)]
    pub disable_tt: bool,

    /// MCTS exploration constant
    #[arg(long)]
    pub cp: Option<f64>,

    /// MCTS RAVE parameter (<= 0 disables RAVE)
    #[arg(long, allow_negative_numbers = true)]
    pub rave_k: Option<f64>,

    /// Seed for the MCTS rollouts and the random evaluator
    #[arg(long)]
    pub seed: Option<u64>,
}

impl EngineOverrides {
    /// Apply to `config`. A time limit without an explicit depth or
    /// iteration count switches both engines to the time budget.
    pub fn apply(&self, mut config: HexConfig) -> HexConfig {
        if let Some(secs) = self.time_limit {
            config.minimax.time_limit_secs = secs;
            config.mcts.time_limit_secs = secs;
            config.minimax.depth = 0;
            config.mcts.iterations = 0;
        }
        if let Some(depth) = self.depth {
            config.minimax.depth = depth;
        }
        if let Some(iterations) = self.iterations {
            config.mcts.iterations = iterations;
        }
        if let Some(evaluator) = &self.evaluator {
            config.minimax.evaluator = evaluator.clone();
        }
        if self.disable_tt {
            config.minimax.disable_tt = true;
        }
        if let Some(cp) = self.cp {
            config.mcts.cp = cp;
        }
        if let Some(rave_k) = self.rave_k {
            config.mcts.rave_k = rave_k;
        }
        if let Some(seed) = self.seed {
            config.minimax.seed = Some(seed);
            config.mcts.seed = Some(seed);
        }
        config
    }
}

fn parse_player(s: &str) -> Result<Color, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "red" | "r" => Ok(Color::Red),
        "blue" | "b" => Ok(Color::Blue),
        _ => Err(format!("invalid colour '{s}', expected red or blue")),
    }
}

impl Cli {
    /// The loaded configuration with this command's overrides applied.
    pub fn hex_config(&self) -> HexConfig {
        let overrides = match &self.command {
            Command::Play(args) => &args.overrides,
            Command::Match(args) => &args.overrides,
        };
        overrides.apply(HEX_CONFIG.clone())
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        let (size, overrides) = match &self.command {
            Command::Play(args) => (args.size, &args.overrides),
            Command::Match(args) => {
                if args.games == 0 {
                    return Err(anyhow!("games must be greater than 0"));
                }
                (args.size, &args.overrides)
            }
        };

        if size == 0 || size > 26 {
            return Err(anyhow!("size must be between 1 and 26, got {size}"));
        }

        if let Some(secs) = overrides.time_limit {
            if !(secs > 0.0 && Duration::try_from_secs_f64(secs).is_ok()) {
                return Err(anyhow!("time_limit must be a positive number of seconds"));
            }
        }

        Ok(())
    }
}
