//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices; the parent link is a plain index.

use hex_board::{reward, Board, BoardError, Color, Coord};

use crate::node::{MctsNode, NodeId};

/// Moves each player made below some node, used for AMAF updates.
#[derive(Debug, Clone)]
pub struct PlayedMoves {
    size: usize,
    red: Vec<bool>,
    blue: Vec<bool>,
}

impl PlayedMoves {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            red: vec![false; size * size],
            blue: vec![false; size * size],
        }
    }

    pub fn insert(&mut self, color: Color, mv: Coord) {
        let offset = mv.row * self.size + mv.col;
        match color {
            Color::Red => self.red[offset] = true,
            Color::Blue => self.blue[offset] = true,
            Color::Empty => {}
        }
    }

    pub fn contains(&self, color: Color, mv: Coord) -> bool {
        let offset = mv.row * self.size + mv.col;
        match color {
            Color::Red => self.red[offset],
            Color::Blue => self.blue[offset],
            Color::Empty => false,
        }
    }
}

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree {
    /// Arena storing all nodes
    nodes: Vec<MctsNode>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl MctsTree {
    /// Create a new tree rooted at `board` with `to_move` to play.
    pub fn new(board: Board, to_move: Color) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(board, to_move)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode] {
        &self.nodes
    }

    /// Expand the most recently listed untried move of `parent_id`.
    ///
    /// Returns `None` when every move already has a child.
    pub fn expand(&mut self, parent_id: NodeId) -> Result<Option<NodeId>, BoardError> {
        let parent = self.get_mut(parent_id);
        let Some(mv) = parent.untried.pop() else {
            return Ok(None);
        };
        let to_move = parent.to_move;
        let board = parent.board.make_move(mv, to_move)?;

        let child_id = self.allocate(MctsNode::new_child(parent_id, mv, board, to_move.opposite()));
        self.get_mut(parent_id).children.push((mv, child_id));
        Ok(Some(child_id))
    }

    /// Select the best child of a node.
    ///
    /// Uses the RAVE score when `rave_k > 0`, plain UCT otherwise. Ties go to
    /// the earliest expanded child.
    pub fn select_child(&self, node_id: NodeId, cp: f64, rave_k: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let ln_visits = f64::from(node.visits.max(1)).ln();

        let mut best: Option<(NodeId, f64)> = None;
        for &(_, child_id) in &node.children {
            let child = self.get(child_id);
            let score = if rave_k > 0.0 {
                child.rave_score(ln_visits, cp, rave_k)
            } else {
                child.uct_score(ln_visits, cp)
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child_id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Backpropagate a rollout result from a leaf to the root.
    ///
    /// Every node on the path gets one visit and the reward of its mover.
    /// With `played` (the rollout's moves per player), each node on the path
    /// also credits the AMAF statistics of every child whose move its side to
    /// move played anywhere below it.
    pub fn backpropagate(&mut self, leaf_id: NodeId, winner: Color, mut played: Option<PlayedMoves>) {
        let mut current_id = leaf_id;

        while current_id.is_some() {
            let (to_move, mv, parent) = {
                let node = self.get_mut(current_id);
                node.visits += 1;
                node.reward += reward(node.mover(), winner);
                (node.to_move, node.mv, node.parent)
            };

            if let Some(played) = played.as_mut() {
                let amaf = reward(to_move, winner);
                for i in 0..self.get(current_id).children.len() {
                    let (child_move, child_id) = self.get(current_id).children[i];
                    if played.contains(to_move, child_move) {
                        let child = self.get_mut(child_id);
                        child.amaf_visits += 1;
                        child.amaf_reward += amaf;
                    }
                }
                // This node's move counts as played for every ancestor
                if let Some(mv) = mv {
                    played.insert(to_move.opposite(), mv);
                }
            }

            current_id = parent;
        }
    }

    /// Most visited root child as (move, visits); the first one on ties.
    pub fn best_move(&self) -> Option<(Coord, u32)> {
        let mut best: Option<(Coord, u32)> = None;
        for &(mv, child_id) in &self.get(self.root).children {
            let visits = self.get(child_id).visits;
            if best.map_or(true, |(_, best_visits)| visits > best_visits) {
                best = Some((mv, visits));
            }
        }
        best
    }

    /// Node id of the root child reached by `mv`.
    pub fn root_child(&self, mv: Coord) -> Option<NodeId> {
        self.get(self.root)
            .children
            .iter()
            .find(|(child_move, _)| *child_move == mv)
            .map(|(_, id)| *id)
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            max_depth: self.max_depth(),
        }
    }

    fn max_depth(&self) -> u32 {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0u32)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(self.get(id).children.iter().map(|(_, child)| (*child, depth + 1)));
        }
        max_depth
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub max_depth: u32,
}
