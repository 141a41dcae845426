//! Alpha-beta search implementation.

use std::time::{Duration, Instant};

use engine_core::{validate_request, Engine, EngineError};
use hex_board::{Board, BoardError, Color, Coord};
use hex_eval::{Evaluator, WIN_SCORE};
use tracing::{debug, trace};

use crate::config::{MinimaxBudget, MinimaxConfig};
use crate::transposition::{Bound, TranspositionTable, TtEntry};

/// Counters describing one move request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
    /// Move loops cut short by the window closing.
    pub cutoffs: u64,
    /// Transposition table entries found.
    pub tt_hits: u64,
    /// Depth of the pass that produced the answer.
    pub depth: u32,
    pub elapsed: Duration,
}

/// Result of a search from one root position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub best_move: Coord,
    /// Score of `best_move` for the side to move at the root.
    pub score: f64,
    pub stats: SearchStats,
}

/// Why a search pass stopped early.
enum Stop {
    Deadline,
    Failed(EngineError),
}

impl From<BoardError> for Stop {
    fn from(err: BoardError) -> Self {
        Stop::Failed(err.into())
    }
}

/// Minimax engine with alpha-beta pruning and a transposition table.
///
/// The table lives as long as the engine, so positions seen while answering
/// one move are reused by the next. Use one engine per line of play.
pub struct MinimaxEngine {
    config: MinimaxConfig,
    evaluator: Evaluator,
    tt: TranspositionTable,
    stats: SearchStats,
    deadline: Option<Instant>,
}

impl MinimaxEngine {
    pub fn new(config: MinimaxConfig, evaluator: Evaluator) -> Self {
        Self {
            config,
            evaluator,
            tt: TranspositionTable::new(),
            stats: SearchStats::default(),
            deadline: None,
        }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn clear_table(&mut self) {
        self.tt.clear();
    }

    /// Search `board` for `color` within the configured budget.
    pub fn search(&mut self, board: &Board, color: Color) -> Result<SearchOutcome, EngineError> {
        validate_request(board, color)?;

        let start = Instant::now();
        self.stats = SearchStats::default();

        let (depths, deadline) = match self.config.budget {
            MinimaxBudget::Depth(depth) => (depth.max(1)..=depth.max(1), None),
            // A limit too large to represent as an instant never expires
            MinimaxBudget::TimeLimit(limit) => {
                (1..=board.possible_moves().len() as u32, start.checked_add(limit))
            }
        };

        let mut best = None;
        for depth in depths {
            // The first pass runs without a deadline so there is always an answer
            self.deadline = if best.is_some() { deadline } else { None };

            match self.search_root(board, color, depth) {
                Ok((mv, score)) => {
                    best = Some((mv, score, depth));
                    trace!(
                        depth,
                        score,
                        nodes = self.stats.nodes,
                        "Minimax pass complete"
                    );
                    // A decided score cannot change with more depth
                    if score.abs() >= WIN_SCORE {
                        break;
                    }
                    if deadline.is_some_and(|d| Instant::now() >= d) {
                        break;
                    }
                }
                Err(Stop::Deadline) => {
                    trace!(depth, "Minimax pass abandoned at deadline");
                    break;
                }
                Err(Stop::Failed(err)) => return Err(err),
            }
        }
        self.deadline = None;

        let (best_move, score, depth) = best.ok_or(EngineError::NoLegalMoves)?;
        self.stats.depth = depth;
        self.stats.elapsed = start.elapsed();

        debug!(
            color = %color,
            best_move = %best_move,
            score,
            depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            tt_hits = self.stats.tt_hits,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            "Minimax search complete"
        );

        Ok(SearchOutcome {
            best_move,
            score,
            stats: self.stats,
        })
    }

    /// One full-window pass at `depth`. Ties keep the first move in board order.
    fn search_root(&mut self, board: &Board, color: Color, depth: u32) -> Result<(Coord, f64), Stop> {
        self.stats.nodes += 1;

        let mut best: Option<(Coord, f64)> = None;
        let mut alpha = f64::NEG_INFINITY;
        for mv in board.possible_moves() {
            let child = board.make_move(mv, color)?;
            let score = -self.negamax(&child, color.opposite(), depth - 1, f64::NEG_INFINITY, -alpha)?;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
                alpha = score;
            }
        }

        best.ok_or(Stop::Failed(EngineError::NoLegalMoves))
    }

    fn negamax(
        &mut self,
        board: &Board,
        to_move: Color,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<f64, Stop> {
        self.stats.nodes += 1;
        self.check_deadline()?;

        if depth == 0 || board.winner().is_some() {
            return Ok(self.evaluator.evaluate(board, to_move));
        }

        let hash = board.hash_code();
        if !self.config.disable_tt {
            if let Some(entry) = self.tt.probe(hash, to_move, depth) {
                self.stats.tt_hits += 1;
                match entry.bound {
                    Bound::Exact => return Ok(entry.score),
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return Ok(entry.score);
                }
            }
        }

        // Bound kind is judged against the window actually searched
        let window_alpha = alpha;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;

        for mv in board.possible_moves() {
            let child = board.make_move(mv, to_move)?;
            let score = -self.negamax(&child, to_move.opposite(), depth - 1, -beta, -alpha)?;

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if best_score > alpha {
                alpha = best_score;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if !self.config.disable_tt {
            let bound = if best_score <= window_alpha {
                Bound::Upper
            } else if best_score >= beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.tt.store(
                hash,
                to_move,
                depth,
                TtEntry {
                    score: best_score,
                    best_move,
                    bound,
                },
            );
        }

        Ok(best_score)
    }

    #[inline]
    fn check_deadline(&self) -> Result<(), Stop> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Stop::Deadline),
            _ => Ok(()),
        }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn get_next_move(&mut self, board: &Board, color: Color) -> Result<Coord, EngineError> {
        self.search(board, color).map(|outcome| outcome.best_move)
    }
}

/// Plain negamax to `depth` without pruning or caching, scored for `color`.
///
/// Visits every line, so it is only practical on small boards. `color` must
/// be a player.
pub fn full_minimax(board: &Board, depth: u32, color: Color, evaluator: &mut Evaluator) -> f64 {
    if depth == 0 || board.winner().is_some() {
        return evaluator.evaluate(board, color);
    }

    let mut best = f64::NEG_INFINITY;
    for mv in board.possible_moves() {
        let Ok(child) = board.make_move(mv, color) else {
            continue;
        };
        best = best.max(-full_minimax(&child, depth - 1, color.opposite(), evaluator));
    }
    best
}
