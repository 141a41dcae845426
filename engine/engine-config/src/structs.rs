//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;
use std::time::Duration;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_board_size() -> usize {
    defaults::board_size()
}
fn d_minimax_depth() -> u32 {
    defaults::minimax_depth()
}
fn d_minimax_time_limit() -> f64 {
    defaults::minimax_time_limit_secs()
}
fn d_evaluator() -> String {
    defaults::evaluator().into()
}
fn d_disable_tt() -> bool {
    defaults::disable_tt()
}
fn d_mcts_iterations() -> u32 {
    defaults::mcts_iterations()
}
fn d_mcts_time_limit() -> f64 {
    defaults::mcts_time_limit_secs()
}
fn d_cp() -> f64 {
    defaults::cp()
}
fn d_rave_k() -> f64 {
    defaults::rave_k()
}

/// Seconds as a budget; zero, negative, non-finite and unrepresentable
/// values mean unset.
fn time_limit(secs: f64) -> Option<Duration> {
    if secs > 0.0 {
        Duration::try_from_secs_f64(secs).ok()
    } else {
        None
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct HexConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub minimax: MinimaxSettings,
    #[serde(default)]
    pub mcts: MctsSettings,
}

/// Settings shared by every engine and the binary
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    #[serde(default = "d_board_size")]
    pub board_size: usize,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            board_size: defaults::board_size(),
        }
    }
}

/// Minimax engine settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MinimaxSettings {
    /// Fixed depth in plies, 0 for unset
    #[serde(default = "d_minimax_depth")]
    pub depth: u32,
    /// Per-move time limit in seconds, 0 for unset
    #[serde(default = "d_minimax_time_limit")]
    pub time_limit_secs: f64,
    #[serde(default = "d_evaluator")]
    pub evaluator: String,
    #[serde(default = "d_disable_tt")]
    pub disable_tt: bool,
    /// Seed for the random evaluator
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MinimaxSettings {
    pub fn depth(&self) -> Option<u32> {
        (self.depth > 0).then_some(self.depth)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        time_limit(self.time_limit_secs)
    }
}

impl Default for MinimaxSettings {
    fn default() -> Self {
        Self {
            depth: defaults::minimax_depth(),
            time_limit_secs: defaults::minimax_time_limit_secs(),
            evaluator: defaults::evaluator().into(),
            disable_tt: defaults::disable_tt(),
            seed: None,
        }
    }
}

/// MCTS engine settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsSettings {
    /// Iterations per move, 0 for unset
    #[serde(default = "d_mcts_iterations")]
    pub iterations: u32,
    /// Per-move time limit in seconds, 0 for unset
    #[serde(default = "d_mcts_time_limit")]
    pub time_limit_secs: f64,
    #[serde(default = "d_cp")]
    pub cp: f64,
    #[serde(default = "d_rave_k")]
    pub rave_k: f64,
    /// Rollout seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MctsSettings {
    pub fn iterations(&self) -> Option<u32> {
        (self.iterations > 0).then_some(self.iterations)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        time_limit(self.time_limit_secs)
    }
}

impl Default for MctsSettings {
    fn default() -> Self {
        Self {
            iterations: defaults::mcts_iterations(),
            time_limit_secs: defaults::mcts_time_limit_secs(),
            cp: defaults::cp(),
            rave_k: defaults::rave_k(),
            seed: None,
        }
    }
}
