//! MCTS tree node representation.
//!
//! Each node holds the position reached by playing `mv` from the parent.
//! Rewards stored on a node are from the point of view of the player who
//! made that move, so a parent compares its children without negating.

use hex_board::{Board, Color, Coord};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Move that led to this node from the parent (None for root)
    pub mv: Option<Coord>,

    /// Position at this node
    pub board: Board,

    /// Side to move in `board`
    pub to_move: Color,

    /// Winner of `board`, computed once at creation
    pub winner: Option<Color>,

    /// Moves not yet expanded, popped from the back
    pub untried: Vec<Coord>,

    /// Expanded children as (move, id) pairs in expansion order
    pub children: Vec<(Coord, NodeId)>,

    pub visits: u32,

    /// Sum of rollout rewards for the player who moved into this node
    pub reward: f64,

    /// All-moves-as-first statistics, same perspective as `reward`
    pub amaf_visits: u32,
    pub amaf_reward: f64,
}

impl MctsNode {
    /// Create a new root node.
    pub fn new_root(board: Board, to_move: Color) -> Self {
        Self::build(NodeId::NONE, None, board, to_move)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, mv: Coord, board: Board, to_move: Color) -> Self {
        Self::build(parent, Some(mv), board, to_move)
    }

    fn build(parent: NodeId, mv: Option<Coord>, board: Board, to_move: Color) -> Self {
        Self {
            parent,
            mv,
            winner: board.winner(),
            untried: board.possible_moves(),
            board,
            to_move,
            children: Vec::new(),
            visits: 0,
            reward: 0.0,
            amaf_visits: 0,
            amaf_reward: 0.0,
        }
    }

    /// The player whose move produced this node.
    #[inline]
    pub fn mover(&self) -> Color {
        self.to_move.opposite()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Check if every legal move has a child.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Average reward, 0.0 if never visited.
    #[inline]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward / f64::from(self.visits)
        }
    }

    /// Average AMAF reward, None before the first AMAF update.
    #[inline]
    pub fn amaf_mean(&self) -> Option<f64> {
        (self.amaf_visits > 0).then(|| self.amaf_reward / f64::from(self.amaf_visits))
    }

    #[inline]
    fn exploration(&self, ln_parent_visits: f64, cp: f64) -> f64 {
        cp * (2.0 * ln_parent_visits / f64::from(self.visits)).sqrt()
    }

    /// UCT score: `reward / visits + cp * sqrt(2 ln N / visits)`.
    ///
    /// Takes the parent's `ln N` so it is computed once per selection.
    /// Unvisited nodes score infinity.
    #[inline]
    pub fn uct_score(&self, ln_parent_visits: f64, cp: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        self.mean_reward() + self.exploration(ln_parent_visits, cp)
    }

    /// UCT score with the exploitation term blended towards the AMAF mean.
    ///
    /// The AMAF weight is `sqrt(k / (3 visits + k))`, so it dominates early and
    /// fades as real visits accumulate. Without AMAF data the node's own mean
    /// stands in for it.
    #[inline]
    pub fn rave_score(&self, ln_parent_visits: f64, cp: f64, rave_k: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let beta = (rave_k / (3.0 * f64::from(self.visits) + rave_k)).sqrt();
        let mean = self.mean_reward();
        let amaf = self.amaf_mean().unwrap_or(mean);
        (1.0 - beta) * mean + beta * amaf + self.exploration(ln_parent_visits, cp)
    }
}
