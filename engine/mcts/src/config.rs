//! MCTS configuration parameters.

use std::time::Duration;

/// How much work one move request may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MctsBudget {
    /// Run exactly this many iterations (at least one).
    Iterations(u32),
    /// Keep iterating until the wall-clock limit passes (at least one iteration).
    TimeLimit(Duration),
}

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Iteration or time budget per move.
    pub budget: MctsBudget,

    /// Exploration constant of the UCT formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub cp: f64,

    /// RAVE equivalence parameter. The AMAF estimate carries half the weight
    /// once a child has about `rave_k / 3` real visits.
    /// Zero or negative disables RAVE entirely.
    pub rave_k: f64,

    /// Seed for the rollout generator; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            budget: MctsBudget::Iterations(1000),
            cp: 0.4,
            rave_k: -1.0,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Create a fast, reproducible config for testing.
    pub fn for_testing() -> Self {
        Self {
            budget: MctsBudget::Iterations(200),
            seed: Some(42),
            ..Self::default()
        }
    }

    /// True when the RAVE/AMAF statistics are collected and used.
    #[inline]
    pub fn rave_enabled(&self) -> bool {
        self.rave_k > 0.0
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.budget = MctsBudget::Iterations(n);
        self
    }

    /// Builder pattern: set wall-clock limit per move.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.budget = MctsBudget::TimeLimit(limit);
        self
    }

    /// Builder pattern: set exploration constant.
    pub fn with_cp(mut self, cp: f64) -> Self {
        self.cp = cp;
        self
    }

    /// Builder pattern: set RAVE parameter.
    pub fn with_rave_k(mut self, rave_k: f64) -> Self {
        self.rave_k = rave_k;
        self
    }

    /// Builder pattern: set rollout seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.budget, MctsBudget::Iterations(1000));
        assert!((config.cp - 0.4).abs() < 1e-12);
        assert!(!config.rave_enabled());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_time_limit(Duration::from_millis(100))
            .with_cp(1.0)
            .with_rave_k(300.0)
            .with_seed(9);

        assert_eq!(config.budget, MctsBudget::TimeLimit(Duration::from_millis(100)));
        assert!((config.cp - 1.0).abs() < 1e-12);
        assert!(config.rave_enabled());
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_rave_switch() {
        assert!(!MctsConfig::default().with_rave_k(0.0).rave_enabled());
        assert!(!MctsConfig::default().with_rave_k(-5.0).rave_enabled());
        assert!(MctsConfig::default().with_rave_k(0.5).rave_enabled());
    }
}
