//! The closed set of engines and their construction from configuration.

use std::fmt;
use std::str::FromStr;

use engine_config::HexConfig;
use engine_core::{Engine, EngineError};
use hex_board::{Board, Color, Coord};
use hex_eval::EvaluatorKind;
use mcts::{MctsBudget, MctsConfig, MctsEngine};
use minimax::{MinimaxBudget, MinimaxConfig, MinimaxEngine};
use tracing::debug;

use crate::BuildError;

/// Engine family as named in configuration and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Minimax,
    Mcts,
}

impl EngineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::Minimax => "minimax",
            EngineKind::Mcts => "mcts",
        }
    }
}

impl FromStr for EngineKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "alphabeta" => Ok(EngineKind::Minimax),
            "mcts" => Ok(EngineKind::Mcts),
            _ => Err(BuildError::UnknownEngine(s.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to build one engine, already validated.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineSpec {
    Minimax {
        config: MinimaxConfig,
        evaluator: EvaluatorKind,
        seed: Option<u64>,
    },
    Mcts(MctsConfig),
}

impl EngineSpec {
    /// Read the `[minimax]` or `[mcts]` section of `config`.
    ///
    /// Exactly one of the fixed budget (depth or iterations) and the time
    /// limit must be set.
    pub fn from_config(kind: EngineKind, config: &HexConfig) -> Result<Self, BuildError> {
        match kind {
            EngineKind::Minimax => {
                let settings = &config.minimax;
                let budget = match (settings.depth(), settings.time_limit()) {
                    (Some(_), Some(_)) => return Err(BuildError::ConflictingBudget(kind)),
                    (None, None) => return Err(BuildError::MissingBudget(kind)),
                    (Some(depth), None) => MinimaxBudget::Depth(depth),
                    (None, Some(limit)) => MinimaxBudget::TimeLimit(limit),
                };
                Ok(EngineSpec::Minimax {
                    config: MinimaxConfig {
                        budget,
                        disable_tt: settings.disable_tt,
                    },
                    evaluator: settings.evaluator.parse()?,
                    seed: settings.seed,
                })
            }
            EngineKind::Mcts => {
                let settings = &config.mcts;
                let budget = match (settings.iterations(), settings.time_limit()) {
                    (Some(_), Some(_)) => return Err(BuildError::ConflictingBudget(kind)),
                    (None, None) => return Err(BuildError::MissingBudget(kind)),
                    (Some(iterations), None) => MctsBudget::Iterations(iterations),
                    (None, Some(limit)) => MctsBudget::TimeLimit(limit),
                };
                Ok(EngineSpec::Mcts(MctsConfig {
                    budget,
                    cp: settings.cp,
                    rave_k: settings.rave_k,
                    seed: settings.seed,
                }))
            }
        }
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            EngineSpec::Minimax { .. } => EngineKind::Minimax,
            EngineSpec::Mcts(_) => EngineKind::Mcts,
        }
    }

    /// Build a fresh engine. Each call gets its own table and generator.
    pub fn build(&self) -> AnyEngine {
        debug!(spec = ?self, "Building engine");
        match self {
            EngineSpec::Minimax {
                config,
                evaluator,
                seed,
            } => AnyEngine::Minimax(MinimaxEngine::new(config.clone(), evaluator.build(*seed))),
            EngineSpec::Mcts(config) => AnyEngine::Mcts(MctsEngine::new(config.clone())),
        }
    }
}

/// Any engine this workspace provides.
pub enum AnyEngine {
    Minimax(MinimaxEngine),
    Mcts(MctsEngine),
}

impl AnyEngine {
    pub fn kind(&self) -> EngineKind {
        match self {
            AnyEngine::Minimax(_) => EngineKind::Minimax,
            AnyEngine::Mcts(_) => EngineKind::Mcts,
        }
    }
}

impl Engine for AnyEngine {
    fn name(&self) -> &str {
        match self {
            AnyEngine::Minimax(engine) => engine.name(),
            AnyEngine::Mcts(engine) => engine.name(),
        }
    }

    fn get_next_move(&mut self, board: &Board, color: Color) -> Result<Coord, EngineError> {
        match self {
            AnyEngine::Minimax(engine) => engine.get_next_move(board, color),
            AnyEngine::Mcts(engine) => engine.get_next_move(board, color),
        }
    }
}
