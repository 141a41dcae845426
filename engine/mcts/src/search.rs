//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm:
//! 1. Selection: Traverse the tree with UCT (or RAVE) until a node with
//!    untried moves or a decided game
//! 2. Expansion: Add one child for the last untried move
//! 3. Simulation: Play uniformly random moves to the end of the game
//! 4. Backpropagation: Update visit, reward and AMAF statistics along the path

use std::time::{Duration, Instant};

use engine_core::{validate_request, Engine, EngineError};
use hex_board::{Board, Color, Coord};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::{MctsBudget, MctsConfig};
use crate::node::NodeId;
use crate::tree::{MctsTree, PlayedMoves, TreeStats};

/// Result of an MCTS search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move: the most visited root child
    pub best_move: Coord,

    /// Visits of the chosen child
    pub visits: u32,

    /// Mean reward of the chosen child for the side to move
    pub value: f64,

    /// Number of iterations performed
    pub iterations: u32,

    pub tree: TreeStats,
    pub elapsed: Duration,
}

/// MCTS search state for one move request.
pub struct MctsSearch<'a> {
    tree: MctsTree,
    config: &'a MctsConfig,
    rng: &'a mut ChaCha20Rng,
}

impl<'a> MctsSearch<'a> {
    /// Create a new MCTS search from the given position.
    pub fn new(
        board: &Board,
        to_move: Color,
        config: &'a MctsConfig,
        rng: &'a mut ChaCha20Rng,
    ) -> Result<Self, EngineError> {
        validate_request(board, to_move)?;

        Ok(Self {
            tree: MctsTree::new(board.clone(), to_move),
            config,
            rng,
        })
    }

    /// Run the search until the configured budget is spent.
    pub fn run(&mut self) -> Result<SearchResult, EngineError> {
        let start = Instant::now();
        let mut iterations = 0u32;

        match self.config.budget {
            MctsBudget::Iterations(n) => {
                for _ in 0..n.max(1) {
                    self.iterate()?;
                    iterations += 1;
                }
            }
            MctsBudget::TimeLimit(limit) => loop {
                self.iterate()?;
                iterations += 1;
                if start.elapsed() >= limit {
                    break;
                }
            },
        }

        let (mv, visits) = self.tree.best_move().ok_or(EngineError::NoLegalMoves)?;
        let child_id = self.tree.root_child(mv).ok_or(EngineError::NoLegalMoves)?;
        let child = self.tree.get(child_id);
        let value = child.mean_reward();

        // The answer is the cell that differs between the root and the chosen child
        let root = self.tree.get(self.tree.root());
        let best_move = Board::move_between(&root.board, &child.board)?;

        Ok(SearchResult {
            best_move,
            visits,
            value,
            iterations,
            tree: self.tree.stats(),
            elapsed: start.elapsed(),
        })
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    fn iterate(&mut self) -> Result<(), EngineError> {
        let leaf_id = self.select_and_expand()?;
        let (winner, played) = self.simulate(leaf_id)?;
        self.tree.backpropagate(leaf_id, winner, played);

        trace!(leaf = leaf_id.0, winner = %winner, "MCTS iteration complete");
        Ok(())
    }

    /// Walk down from the root, expanding the first node with untried moves.
    fn select_and_expand(&mut self) -> Result<NodeId, EngineError> {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);
            if node.is_terminal() {
                return Ok(current);
            }
            if let Some(child) = self.tree.expand(current)? {
                return Ok(child);
            }
            match self
                .tree
                .select_child(current, self.config.cp, self.config.rave_k)
            {
                Some(child) => current = child,
                None => return Ok(current),
            }
        }
    }

    /// Play random moves from `node_id` until someone wins.
    ///
    /// Returns the winner and, with RAVE on, the moves each player made.
    fn simulate(&mut self, node_id: NodeId) -> Result<(Color, Option<PlayedMoves>), EngineError> {
        let node = self.tree.get(node_id);
        let mut played = self
            .config
            .rave_enabled()
            .then(|| PlayedMoves::new(node.board.size()));

        if let Some(winner) = node.winner {
            return Ok((winner, played));
        }

        let mut board = node.board.clone();
        let mut turn = node.to_move;
        let mut moves = board.possible_moves();
        moves.shuffle(&mut *self.rng);

        for mv in moves {
            board.place(mv, turn)?;
            if let Some(played) = played.as_mut() {
                played.insert(turn, mv);
            }
            // Only the player who just moved can have completed a chain
            if board.has_won(turn) {
                return Ok((turn, played));
            }
            turn = turn.opposite();
        }

        // A full board always has a winner
        board
            .winner()
            .map(|winner| (winner, played))
            .ok_or(EngineError::NoLegalMoves)
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }
}

/// Monte Carlo tree search engine.
///
/// A fresh tree is built for every move request and dropped afterwards.
/// The rollout generator lives as long as the engine, so a seeded engine
/// plays a reproducible sequence of moves.
pub struct MctsEngine {
    config: MctsConfig,
    rng: ChaCha20Rng,
}

impl MctsEngine {
    pub fn new(config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Search `board` for `color` within the configured budget.
    pub fn search(&mut self, board: &Board, color: Color) -> Result<SearchResult, EngineError> {
        let mut search = MctsSearch::new(board, color, &self.config, &mut self.rng)?;
        let result = search.run()?;

        debug!(
            color = %color,
            best_move = %result.best_move,
            visits = result.visits,
            value = result.value,
            iterations = result.iterations,
            nodes = result.tree.total_nodes,
            max_depth = result.tree.max_depth,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "MCTS search complete"
        );

        Ok(result)
    }
}

impl Engine for MctsEngine {
    fn name(&self) -> &str {
        "mcts"
    }

    fn get_next_move(&mut self, board: &Board, color: Color) -> Result<Coord, EngineError> {
        self.search(board, color).map(|result| result.best_move)
    }
}
