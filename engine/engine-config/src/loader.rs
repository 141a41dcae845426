//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::HexConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the HEX_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> HexConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("HEX_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from HEX_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!("HEX_CONFIG={} not found, searching defaults", path.display());
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(HexConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files fall back to the built-in defaults.
pub fn load_from_path(path: &Path) -> HexConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(HexConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(HexConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, f64, bool, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        match std::env::var($key).map(|s| s.parse()) {
            Ok(Ok(v)) => $config.$section.$field = v,
            Ok(Err(_)) => warn!(key = $key, "Ignoring unparseable override"),
            Err(_) => {}
        }
    };
    // Optional parseable field (Option<u64>, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        match std::env::var($key).map(|s| s.parse()) {
            Ok(Ok(v)) => $config.$section.$field = Some(v),
            Ok(Err(_)) => warn!(key = $key, "Ignoring unparseable override"),
            Err(_) => {}
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: HEX_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: HexConfig) -> HexConfig {
    // Common
    env_override!(config, common.log_level, "HEX_COMMON_LOG_LEVEL");
    env_override!(config, common.board_size, "HEX_COMMON_BOARD_SIZE", parse);

    // Minimax
    env_override!(config, minimax.depth, "HEX_MINIMAX_DEPTH", parse);
    env_override!(
        config,
        minimax.time_limit_secs,
        "HEX_MINIMAX_TIME_LIMIT_SECS",
        parse
    );
    env_override!(config, minimax.evaluator, "HEX_MINIMAX_EVALUATOR");
    env_override!(config, minimax.disable_tt, "HEX_MINIMAX_DISABLE_TT", parse);
    env_override!(config, minimax.seed, "HEX_MINIMAX_SEED", optional_parse);

    // MCTS
    env_override!(config, mcts.iterations, "HEX_MCTS_ITERATIONS", parse);
    env_override!(
        config,
        mcts.time_limit_secs,
        "HEX_MCTS_TIME_LIMIT_SECS",
        parse
    );
    env_override!(config, mcts.cp, "HEX_MCTS_CP", parse);
    env_override!(config, mcts.rave_k, "HEX_MCTS_RAVE_K", parse);
    env_override!(config, mcts.seed, "HEX_MCTS_SEED", optional_parse);

    config
}
