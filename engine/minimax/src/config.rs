//! Minimax configuration parameters.

use std::time::Duration;

/// How much work one move request may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimaxBudget {
    /// Search exactly this many plies (values below 1 are treated as 1).
    Depth(u32),
    /// Deepen iteratively until the wall-clock limit passes.
    TimeLimit(Duration),
}

/// Configuration for the minimax engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimaxConfig {
    /// Depth or time budget per move.
    pub budget: MinimaxBudget,

    /// Skip the transposition table entirely.
    pub disable_tt: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            budget: MinimaxBudget::Depth(3),
            disable_tt: false,
        }
    }
}

impl MinimaxConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            budget: MinimaxBudget::Depth(2),
            disable_tt: false,
        }
    }

    /// Builder pattern: fixed search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.budget = MinimaxBudget::Depth(depth);
        self
    }

    /// Builder pattern: wall-clock limit per move.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.budget = MinimaxBudget::TimeLimit(limit);
        self
    }

    /// Builder pattern: turn the transposition table on or off.
    pub fn with_tt(mut self, enabled: bool) -> Self {
        self.disable_tt = !enabled;
        self
    }
}
