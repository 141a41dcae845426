//! Shortest connection cost between a player's two borders.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use hex_board::{Board, Color, Coord};

/// Search algorithm used for the connection cost. Both return the same cost;
/// A* usually pops fewer cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAlgorithm {
    Dijkstra,
    AStar,
}

/// Cost of entering a cell for `color`; `None` when the opponent holds it.
#[inline]
fn cell_cost(cell: Color, color: Color) -> Option<u32> {
    if cell == color {
        Some(0)
    } else if cell == Color::Empty {
        Some(1)
    } else {
        None
    }
}

/// Minimum number of stones `color` still has to play to connect its borders.
///
/// Returns `size²` when the opponent has already cut every path, which only
/// happens once the opponent has won.
pub fn shortest_path_cost(board: &Board, color: Color, algorithm: PathAlgorithm) -> u32 {
    match algorithm {
        PathAlgorithm::Dijkstra => search(board, color, |_| 0),
        PathAlgorithm::AStar => {
            let remaining = open_lines_ahead(board, color);
            search(board, color, |coord| remaining[line_of(color, coord)])
        }
    }
}

/// Index of the line (row for Red, column for Blue) `coord` lies on.
#[inline]
fn line_of(color: Color, coord: Coord) -> usize {
    match color {
        Color::Blue => coord.col,
        _ => coord.row,
    }
}

/// For each line, how many lines between it and the target border hold no
/// stone of `color`.
///
/// Any path still has to enter a cell on each of those lines and pays at least
/// one for it, so the count never overestimates the remaining cost. A step
/// moves at most one line forward, which keeps the estimate consistent.
fn open_lines_ahead(board: &Board, color: Color) -> Vec<u32> {
    let size = board.size();
    let mut has_own = vec![false; size];
    for (offset, cell) in board.cells().iter().enumerate() {
        if *cell == color {
            let coord = Coord::new(offset / size, offset % size);
            has_own[line_of(color, coord)] = true;
        }
    }

    let mut remaining = vec![0; size];
    for line in (0..size.saturating_sub(1)).rev() {
        remaining[line] = remaining[line + 1] + u32::from(!has_own[line + 1]);
    }
    remaining
}

fn search(board: &Board, color: Color, heuristic: impl Fn(Coord) -> u32) -> u32 {
    let size = board.size();
    let unreachable = (size * size) as u32;
    if !color.is_player() {
        return unreachable;
    }

    let cells = board.cells();
    let mut best = vec![u32::MAX; cells.len()];
    let mut frontier = BinaryHeap::new();

    for coord in board.source_coords(color) {
        let offset = coord.row * size + coord.col;
        if let Some(cost) = cell_cost(cells[offset], color) {
            best[offset] = cost;
            frontier.push(Reverse((cost + heuristic(coord), cost, coord)));
        }
    }

    while let Some(Reverse((_, cost, coord))) = frontier.pop() {
        if cost > best[coord.row * size + coord.col] {
            continue;
        }
        if board.is_target(color, coord) {
            return cost;
        }

        for next in board.neighbors(coord) {
            let offset = next.row * size + next.col;
            let Some(step) = cell_cost(cells[offset], color) else {
                continue;
            };
            let candidate = cost + step;
            if candidate < best[offset] {
                best[offset] = candidate;
                frontier.push(Reverse((candidate + heuristic(next), candidate, next)));
            }
        }
    }

    unreachable
}
