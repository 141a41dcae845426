//! Tests for the alpha-beta search.

use super::*;
use engine_core::{Engine, EngineError};
use hex_board::{Board, Color, Coord};
use hex_eval::{Evaluator, WIN_SCORE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::time::Duration;

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

fn engine(depth: u32) -> MinimaxEngine {
    MinimaxEngine::new(MinimaxConfig::default().with_depth(depth), Evaluator::dijkstra())
}

/// Random open position with `stones` alternating stones, Red first.
fn random_position(rng: &mut ChaCha20Rng, size: usize, stones: usize) -> Option<(Board, Color)> {
    let mut board = Board::new(size).unwrap();
    let mut moves = board.possible_moves();
    moves.shuffle(rng);

    let mut color = Color::Red;
    for mv in moves.into_iter().take(stones) {
        board.place(mv, color).unwrap();
        color = color.opposite();
    }
    board.winner().is_none().then_some((board, color))
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::new(4)
        .unwrap()
        .make_move(c(1, 2), Color::Red)
        .unwrap();

    let first = engine(3).search(&board, Color::Blue).unwrap();
    for _ in 0..3 {
        let again = engine(3).search(&board, Color::Blue).unwrap();
        assert_eq!(again.best_move, first.best_move);
        assert_eq!(again.score, first.score);
    }

    // Reusing one engine (and its table) gives the same answer
    let mut reused = engine(3);
    for _ in 0..3 {
        assert_eq!(reused.get_next_move(&board, Color::Blue).unwrap(), first.best_move);
    }
}

#[test]
fn test_alpha_beta_matches_full_minimax() {
    for seed in 0..24 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let size = rng.gen_range(3..=4);
        let stones = rng.gen_range(size * size - 8..size * size - 3);
        let Some((board, to_move)) = random_position(&mut rng, size, stones) else {
            continue;
        };

        for depth in 1..=3 {
            for evaluator in [Evaluator::dijkstra(), Evaluator::astar()] {
                let expected = full_minimax(&board, depth, to_move, &mut evaluator.clone());

                for use_tt in [true, false] {
                    let config = MinimaxConfig::default().with_depth(depth).with_tt(use_tt);
                    let outcome = MinimaxEngine::new(config, evaluator.clone())
                        .search(&board, to_move)
                        .unwrap();
                    assert_eq!(
                        outcome.score, expected,
                        "seed={seed} depth={depth} tt={use_tt}\n{board}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_returned_move_achieves_score() {
    let board = Board::new(4)
        .unwrap()
        .make_move(c(0, 0), Color::Red)
        .unwrap();
    let outcome = engine(2).search(&board, Color::Blue).unwrap();

    let child = board.make_move(outcome.best_move, Color::Blue).unwrap();
    let replayed = -full_minimax(&child, 1, Color::Red, &mut Evaluator::dijkstra());
    assert_eq!(replayed, outcome.score);
}

#[test]
fn test_takes_immediate_win() {
    // a  R . .
    //  b  R B B
    //   c  . . .
    let mut board = Board::new(3).unwrap();
    board.place(c(0, 0), Color::Red).unwrap();
    board.place(c(1, 0), Color::Red).unwrap();
    board.place(c(1, 1), Color::Blue).unwrap();
    board.place(c(1, 2), Color::Blue).unwrap();

    let outcome = engine(1).search(&board, Color::Red).unwrap();
    assert_eq!(outcome.best_move, c(2, 0));
    assert_eq!(outcome.score, WIN_SCORE);
}

#[test]
fn test_full_depth_three_by_three() {
    let board = Board::new(3).unwrap();
    let mut engine = engine(9);

    let outcome = engine.search(&board, Color::Red).unwrap();
    assert_eq!(outcome.score, WIN_SCORE, "first player wins 3x3");

    // Every Blue reply still loses at full depth
    let after = board.make_move(outcome.best_move, Color::Red).unwrap();
    for reply in after.possible_moves() {
        let position = after.make_move(reply, Color::Blue).unwrap();
        if position.winner().is_some() {
            continue;
        }
        let red = engine.search(&position, Color::Red).unwrap();
        assert_eq!(red.score, WIN_SCORE, "Red still wins after Blue {reply}");
    }

    let blue = engine.search(&after, Color::Blue).unwrap();
    assert_eq!(blue.score, -WIN_SCORE);
}

#[test]
fn test_pruning_and_table_counters() {
    let board = Board::new(4).unwrap();

    let mut with_tt = engine(3);
    let first = with_tt.search(&board, Color::Red).unwrap();
    assert!(first.stats.cutoffs > 0);
    assert!(first.stats.nodes > 0);
    assert!(!with_tt.table().is_empty());

    // A second identical request is answered largely from the table
    let second = with_tt.search(&board, Color::Red).unwrap();
    assert!(second.stats.tt_hits > 0);
    assert!(second.stats.nodes < first.stats.nodes);
    assert_eq!(second.best_move, first.best_move);
    assert_eq!(second.score, first.score);

    with_tt.clear_table();
    assert!(with_tt.table().is_empty());
}

#[test]
fn test_disabled_table_is_never_touched() {
    let board = Board::new(4).unwrap();
    let mut engine = MinimaxEngine::new(
        MinimaxConfig::default().with_depth(3).with_tt(false),
        Evaluator::dijkstra(),
    );

    let outcome = engine.search(&board, Color::Red).unwrap();
    assert_eq!(outcome.stats.tt_hits, 0);
    assert!(engine.table().is_empty());
}

#[test]
fn test_time_limit_returns_a_move() {
    let board = Board::new(5).unwrap();
    let mut engine = MinimaxEngine::new(
        MinimaxConfig::default().with_time_limit(Duration::from_millis(50)),
        Evaluator::astar(),
    );

    let outcome = engine.search(&board, Color::Red).unwrap();
    assert!(board.is_empty(outcome.best_move).unwrap());
    assert!(outcome.stats.depth >= 1);
}

#[test]
fn test_zero_time_limit_completes_depth_one() {
    let board = Board::new(4).unwrap();
    let mut engine = MinimaxEngine::new(
        MinimaxConfig::default().with_time_limit(Duration::ZERO),
        Evaluator::dijkstra(),
    );

    let outcome = engine.search(&board, Color::Red).unwrap();
    assert_eq!(outcome.stats.depth, 1);
    assert_eq!(
        outcome.score,
        full_minimax(&board, 1, Color::Red, &mut Evaluator::dijkstra())
    );
}

#[test]
fn test_time_limit_beyond_instant_range_searches_without_deadline() {
    let board = Board::new(3).unwrap();
    let mut engine = MinimaxEngine::new(
        MinimaxConfig::default().with_time_limit(Duration::from_secs(10_000_000_000_000_000_000)),
        Evaluator::dijkstra(),
    );

    let outcome = engine.search(&board, Color::Red).unwrap();
    assert!(board.is_empty(outcome.best_move).unwrap());
    assert_eq!(outcome.score, WIN_SCORE);

    let mut engine = MinimaxEngine::new(
        MinimaxConfig::default().with_time_limit(Duration::MAX),
        Evaluator::dijkstra(),
    );
    assert!(engine.get_next_move(&board, Color::Red).is_ok());
}

#[test]
fn test_time_limit_stops_on_proven_result() {
    // Red wins with (2, 0) at depth 1; no deeper pass is needed
    let mut board = Board::new(3).unwrap();
    board.place(c(0, 0), Color::Red).unwrap();
    board.place(c(1, 0), Color::Red).unwrap();
    board.place(c(1, 1), Color::Blue).unwrap();
    board.place(c(1, 2), Color::Blue).unwrap();

    let mut engine = MinimaxEngine::new(
        MinimaxConfig::default().with_time_limit(Duration::from_secs(5)),
        Evaluator::dijkstra(),
    );
    let outcome = engine.search(&board, Color::Red).unwrap();
    assert_eq!(outcome.best_move, c(2, 0));
    assert_eq!(outcome.stats.depth, 1);
}

#[test]
fn test_rejects_invalid_requests() {
    let mut engine = engine(2);
    let board = Board::new(3).unwrap();
    assert_eq!(
        engine.get_next_move(&board, Color::Empty),
        Err(EngineError::InvalidColor(Color::Empty))
    );

    let mut decided = Board::new(2).unwrap();
    decided.place(c(0, 1), Color::Red).unwrap();
    decided.place(c(1, 0), Color::Red).unwrap();
    assert_eq!(
        engine.get_next_move(&decided, Color::Blue),
        Err(EngineError::TerminalBoard(Color::Red))
    );
}

#[test]
fn test_random_evaluator_plays_legal_moves() {
    let mut engine = MinimaxEngine::new(MinimaxConfig::for_testing(), Evaluator::random(Some(5)));
    let mut board = Board::new(4).unwrap();
    let mut color = Color::Red;

    while board.winner().is_none() {
        let mv = engine.get_next_move(&board, color).unwrap();
        board.place(mv, color).unwrap();
        color = color.opposite();
    }
    assert_eq!(engine.name(), "minimax");
}
