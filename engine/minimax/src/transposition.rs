//! Transposition table for the alpha-beta search.

use std::collections::HashMap;

use hex_board::{Color, Coord};

/// What a stored score says about the true value of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is the value.
    Exact,
    /// The search failed high: the value is at least the score.
    Lower,
    /// The search failed low: the value is at most the score.
    Upper,
}

/// Cached result of searching one position to one depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TtEntry {
    pub score: f64,
    pub best_move: Option<Coord>,
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TtKey {
    hash: u64,
    to_move: Color,
    depth: u32,
}

/// Position cache keyed by board hash, side to move and remaining depth.
///
/// A table belongs to one engine; sharing it across unrelated games is not
/// supported.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<TtKey, TtEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previous search of this position at exactly this depth.
    pub fn probe(&self, hash: u64, to_move: Color, depth: u32) -> Option<TtEntry> {
        self.entries
            .get(&TtKey {
                hash,
                to_move,
                depth,
            })
            .copied()
    }

    /// Record a search result, replacing any older entry for the same key.
    pub fn store(&mut self, hash: u64, to_move: Color, depth: u32, entry: TtEntry) {
        self.entries.insert(
            TtKey {
                hash,
                to_move,
                depth,
            },
            entry,
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
