//! Evaluator variants and their construction.

use std::fmt;
use std::str::FromStr;

use hex_board::{reward, Board, Color};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::path::{shortest_path_cost, PathAlgorithm};

/// Score of a decided game. Heuristic scores never reach it.
pub const WIN_SCORE: f64 = 1000.0;

/// Errors that can occur while choosing an evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    #[error("Unknown evaluator: {0} (expected dijkstra, astar or random)")]
    Unknown(String),
}

/// Evaluator that ignores the position beyond the terminal check.
#[derive(Debug, Clone)]
pub struct RandomEvaluator {
    rng: ChaCha20Rng,
}

impl RandomEvaluator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    fn score(&mut self) -> f64 {
        self.rng.gen_range(-1.0..1.0)
    }
}

/// Position evaluator used by the minimax engine.
#[derive(Debug, Clone)]
pub enum Evaluator {
    ShortestPath(PathAlgorithm),
    Random(RandomEvaluator),
}

impl Evaluator {
    pub fn dijkstra() -> Self {
        Evaluator::ShortestPath(PathAlgorithm::Dijkstra)
    }

    pub fn astar() -> Self {
        Evaluator::ShortestPath(PathAlgorithm::AStar)
    }

    /// Seeded random evaluator; `None` draws the seed from the OS.
    pub fn random(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Evaluator::Random(RandomEvaluator::new(seed)),
            None => Evaluator::Random(RandomEvaluator::from_entropy()),
        }
    }

    pub fn kind(&self) -> EvaluatorKind {
        match self {
            Evaluator::ShortestPath(PathAlgorithm::Dijkstra) => EvaluatorKind::Dijkstra,
            Evaluator::ShortestPath(PathAlgorithm::AStar) => EvaluatorKind::AStar,
            Evaluator::Random(_) => EvaluatorKind::Random,
        }
    }

    /// Score `board` for `color`; higher is better for `color`.
    ///
    /// Decided games score `±WIN_SCORE` whatever the variant. `color` is
    /// expected to be a player; an empty color scores every open position as
    /// a tie.
    pub fn evaluate(&mut self, board: &Board, color: Color) -> f64 {
        if let Some(winner) = board.winner() {
            return reward(color, winner) * WIN_SCORE;
        }

        match self {
            Evaluator::ShortestPath(algorithm) => {
                let own = shortest_path_cost(board, color, *algorithm);
                let opponent = shortest_path_cost(board, color.opposite(), *algorithm);
                -(f64::from(own) - f64::from(opponent))
            }
            Evaluator::Random(random) => random.score(),
        }
    }
}

/// Name of an evaluator as it appears in configuration and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    #[default]
    Dijkstra,
    AStar,
    Random,
}

impl EvaluatorKind {
    /// Build the evaluator; `seed` only matters for [`EvaluatorKind::Random`].
    pub fn build(self, seed: Option<u64>) -> Evaluator {
        match self {
            EvaluatorKind::Dijkstra => Evaluator::dijkstra(),
            EvaluatorKind::AStar => Evaluator::astar(),
            EvaluatorKind::Random => Evaluator::random(seed),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EvaluatorKind::Dijkstra => "dijkstra",
            EvaluatorKind::AStar => "astar",
            EvaluatorKind::Random => "random",
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = EvaluatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(EvaluatorKind::Dijkstra),
            "astar" | "a*" => Ok(EvaluatorKind::AStar),
            "random" => Ok(EvaluatorKind::Random),
            _ => Err(EvaluatorError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
