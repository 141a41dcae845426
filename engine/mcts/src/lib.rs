//! Monte Carlo Tree Search (MCTS) for Hex.
//!
//! # Overview
//!
//! MCTS builds a search tree by running iterations. Each iteration consists of
//! four phases:
//!
//! 1. **Selection**: Traverse the tree using UCT (Upper Confidence bound
//!    applied to Trees) to balance exploration and exploitation
//! 2. **Expansion**: At the first node with untried moves, add a child for
//!    one of them (the last one listed)
//! 3. **Simulation**: Play uniformly random moves from the new child until
//!    one side connects its borders
//! 4. **Backpropagation**: Update visit counts and rewards along the path
//!    from leaf to root
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Engine;
//! use hex_board::{Board, Color};
//! use mcts::{MctsConfig, MctsEngine};
//!
//! let mut engine = MctsEngine::new(MctsConfig::for_testing().with_iterations(100));
//! let board = Board::new(4).unwrap();
//! let mv = engine.get_next_move(&board, Color::Red).unwrap();
//! assert!(board.is_empty(mv).unwrap());
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `budget`: iterations per move (default: 1000) or a wall-clock limit
//! - `cp`: Exploration constant for UCT (default: 0.4)
//! - `rave_k`: RAVE equivalence parameter; `<= 0` disables RAVE (default: -1)
//! - `seed`: rollout seed for reproducible searches
//!
//! # RAVE
//!
//! With `rave_k > 0` every rollout also credits "all moves as first"
//! statistics: a child of a node on the path is updated whenever the side to
//! move at that node played the child's move anywhere later in the iteration.
//! Selection blends those statistics in with weight
//! `sqrt(rave_k / (3 * visits + rave_k))`.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  MctsSearch                   │
//! ├───────────────────────────────────────────────┤
//! │  ┌─────────────┐          ┌────────────────┐  │
//! │  │  MctsTree   │          │  ChaCha20Rng   │  │
//! │  │  (arena)    │          │  (rollouts)    │  │
//! │  └──────┬──────┘          └───────┬────────┘  │
//! │         ▼                         ▼           │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │  select → expand → simulate → backprop  │  │
//! │  └─────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::{MctsBudget, MctsConfig};
pub use node::{MctsNode, NodeId};
pub use search::{MctsEngine, MctsSearch, SearchResult};
pub use tree::{MctsTree, PlayedMoves, TreeStats};
