//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time, so the binary and the
//! documented file can never disagree.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    minimax: MinimaxDefaults,
    mcts: MctsDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    board_size: usize,
}

#[derive(Debug, Deserialize)]
struct MinimaxDefaults {
    depth: u32,
    time_limit_secs: f64,
    evaluator: String,
    disable_tt: bool,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    iterations: u32,
    time_limit_secs: f64,
    cp: f64,
    rave_k: f64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn board_size() -> usize {
    DEFAULTS.common.board_size
}

// Minimax
pub fn minimax_depth() -> u32 {
    DEFAULTS.minimax.depth
}
pub fn minimax_time_limit_secs() -> f64 {
    DEFAULTS.minimax.time_limit_secs
}
pub fn evaluator() -> &'static str {
    &DEFAULTS.minimax.evaluator
}
pub fn disable_tt() -> bool {
    DEFAULTS.minimax.disable_tt
}

// MCTS
pub fn mcts_iterations() -> u32 {
    DEFAULTS.mcts.iterations
}
pub fn mcts_time_limit_secs() -> f64 {
    DEFAULTS.mcts.time_limit_secs
}
pub fn cp() -> f64 {
    DEFAULTS.mcts.cp
}
pub fn rave_k() -> f64 {
    DEFAULTS.mcts.rave_k
}
