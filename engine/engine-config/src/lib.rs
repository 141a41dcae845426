//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! by the engine factory and the `hex` binary.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`HEX_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, compiled in)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! HEX_<SECTION>_<KEY>=value
//!
//! Examples:
//!     HEX_COMMON_BOARD_SIZE=11
//!     HEX_MINIMAX_DEPTH=4
//!     HEX_MINIMAX_EVALUATOR=astar
//!     HEX_MCTS_ITERATIONS=5000
//!     HEX_MCTS_RAVE_K=300
//! ```
//!
//! Numeric budgets use 0 for "unset", so `HEX_MINIMAX_DEPTH=0` together with
//! `HEX_MINIMAX_TIME_LIMIT_SECS=2.5` switches minimax to a time limit.

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
