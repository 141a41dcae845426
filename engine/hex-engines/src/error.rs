use hex_eval::EvaluatorError;
use thiserror::Error;

use crate::EngineKind;

/// Reasons an engine cannot be built from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{0} engine has both a fixed budget and a time limit, set only one")]
    ConflictingBudget(EngineKind),

    #[error("{0} engine needs a fixed budget or a time limit")]
    MissingBudget(EngineKind),

    #[error(transparent)]
    UnknownEvaluator(#[from] EvaluatorError),

    #[error("unknown engine '{0}', expected minimax or mcts")]
    UnknownEngine(String),
}
