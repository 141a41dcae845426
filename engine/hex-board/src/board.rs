//! Board state, connectivity and hashing.

use std::collections::VecDeque;
use std::fmt;

use crate::color::Color;
use crate::coord::Coord;
use crate::error::BoardError;

/// Largest supported board; rows are named `a` through `z`.
pub const MAX_SIZE: usize = 26;

/// Row/column offsets of the six hexagonal neighbours.
const NEIGHBOR_OFFSETS: [(isize, isize); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, 1), (1, -1)];

/// An N×N Hex board.
///
/// Search code treats a board as a value: [`Board::make_move`] returns a new
/// board and leaves `self` untouched. [`Board::place`] mutates in place for
/// callers that play a single game through one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Color>,
    /// XOR of the keys of every stone on the board
    hash: u64,
}

impl Board {
    /// Create an empty board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::InvalidSize {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Self::blank(size))
    }

    fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![Color::Empty; size * size],
            hash: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    #[inline]
    fn offset(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    #[inline]
    fn coord_at(&self, offset: usize) -> Coord {
        Coord::new(offset / self.size, offset % self.size)
    }

    fn checked_offset(&self, coord: Coord) -> Result<usize, BoardError> {
        if coord.row >= self.size || coord.col >= self.size {
            return Err(BoardError::OutOfRange {
                coord,
                size: self.size,
            });
        }
        Ok(self.offset(coord))
    }

    /// True if `coord` lies on this board.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Color of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<Color, BoardError> {
        Ok(self.cells[self.checked_offset(coord)?])
    }

    pub fn is_empty(&self, coord: Coord) -> Result<bool, BoardError> {
        Ok(self.get(coord)? == Color::Empty)
    }

    /// Return a copy of this board with `mv` played by `color`.
    pub fn make_move(&self, mv: Coord, color: Color) -> Result<Board, BoardError> {
        let mut next = self.clone();
        next.place(mv, color)?;
        Ok(next)
    }

    /// Play `mv` for `color` on this board.
    pub fn place(&mut self, mv: Coord, color: Color) -> Result<(), BoardError> {
        if !color.is_player() {
            return Err(BoardError::EmptyColor);
        }
        let offset = self.checked_offset(mv)?;
        if self.cells[offset] != Color::Empty {
            return Err(BoardError::Occupied(mv));
        }
        self.set(offset, color);
        Ok(())
    }

    #[inline]
    fn set(&mut self, offset: usize, color: Color) {
        self.cells[offset] = color;
        self.hash ^= zobrist_key(self.coord_at(offset), color);
    }

    /// All empty cells in row-major order.
    pub fn possible_moves(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Color::Empty)
            .map(|(offset, _)| self.coord_at(offset))
            .collect()
    }

    /// Number of stones on the board.
    pub fn stones(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_player()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_player())
    }

    /// Neighbouring cells of `coord` that lie on the board.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        let size = self.size as isize;
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = coord.row as isize + dr;
            let col = coord.col as isize + dc;
            (row >= 0 && row < size && col >= 0 && col < size)
                .then(|| Coord::new(row as usize, col as usize))
        })
    }

    /// True if `coord` lies on the border `color` starts from
    /// (top row for Red, left column for Blue).
    #[inline]
    pub fn is_source(&self, color: Color, coord: Coord) -> bool {
        match color {
            Color::Red => coord.row == 0,
            Color::Blue => coord.col == 0,
            Color::Empty => false,
        }
    }

    /// True if `coord` lies on the border `color` must reach
    /// (bottom row for Red, right column for Blue).
    #[inline]
    pub fn is_target(&self, color: Color, coord: Coord) -> bool {
        match color {
            Color::Red => coord.row == self.size - 1,
            Color::Blue => coord.col == self.size - 1,
            Color::Empty => false,
        }
    }

    /// Cells of the border `color` starts from.
    pub fn source_coords(&self, color: Color) -> Vec<Coord> {
        self.border(color, 0)
    }

    /// Cells of the border `color` must reach.
    pub fn target_coords(&self, color: Color) -> Vec<Coord> {
        self.border(color, self.size - 1)
    }

    fn border(&self, color: Color, line: usize) -> Vec<Coord> {
        match color {
            Color::Red => (0..self.size).map(|col| Coord::new(line, col)).collect(),
            Color::Blue => (0..self.size).map(|row| Coord::new(row, line)).collect(),
            Color::Empty => Vec::new(),
        }
    }

    /// True if `color` has a chain of its own stones joining its two borders.
    pub fn has_won(&self, color: Color) -> bool {
        if !color.is_player() {
            return false;
        }

        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();

        for coord in self.border(color, 0) {
            let offset = self.offset(coord);
            if self.cells[offset] == color {
                visited[offset] = true;
                queue.push_back(coord);
            }
        }

        while let Some(coord) = queue.pop_front() {
            if self.is_target(color, coord) {
                return true;
            }
            for next in self.neighbors(coord) {
                let offset = self.offset(next);
                if !visited[offset] && self.cells[offset] == color {
                    visited[offset] = true;
                    queue.push_back(next);
                }
            }
        }

        false
    }

    /// The player that has connected their borders, if any.
    ///
    /// Valid at any point of the game. Once the board is full exactly one
    /// player is connected.
    pub fn winner(&self) -> Option<Color> {
        Color::PLAYERS
            .into_iter()
            .find(|&color| self.has_won(color))
    }

    /// Fingerprint of the cell assignment.
    ///
    /// Depends only on which stones are where, never on the order they were
    /// played in.
    #[inline]
    pub fn hash_code(&self) -> u64 {
        self.hash
    }

    /// Rows of grid-encoded cells (see [`Color::to_u8`]).
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.to_u8()).collect())
            .collect()
    }

    /// Rebuild a board from [`Board::to_grid`] output.
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Board, BoardError> {
        let size = grid.len();
        let mut board = Board::new(size)?;

        for (row, values) in grid.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    size
                )));
            }
            for (col, &value) in values.iter().enumerate() {
                let color = Color::from_u8(value).ok_or_else(|| {
                    BoardError::InvalidGrid(format!("invalid cell value {} at ({}, {})", value, row, col))
                })?;
                if color.is_player() {
                    board.set(row * size + col, color);
                }
            }
        }

        Ok(board)
    }

    /// Reflect the board across its main diagonal and swap the colors.
    ///
    /// Red's top-to-bottom connection becomes Blue's left-to-right one, so a
    /// position can always be expressed from Red's point of view.
    pub fn mirrored(&self) -> Board {
        let mut mirrored = Board::blank(self.size);
        for (offset, cell) in self.cells.iter().enumerate() {
            if cell.is_player() {
                let coord = self.coord_at(offset);
                mirrored.set(coord.col * self.size + coord.row, cell.opposite());
            }
        }
        mirrored
    }

    /// The cell that is empty in `before` and occupied in `after`.
    ///
    /// Fails unless the two boards differ in exactly that one cell.
    pub fn move_between(before: &Board, after: &Board) -> Result<Coord, BoardError> {
        if before.size != after.size {
            return Err(BoardError::SizeMismatch(before.size, after.size));
        }

        let mut differing = 0;
        let mut played = None;
        for (offset, (a, b)) in before.cells.iter().zip(after.cells.iter()).enumerate() {
            if a != b {
                differing += 1;
                if *a == Color::Empty {
                    played = Some(offset);
                }
            }
        }

        match (differing, played) {
            (1, Some(offset)) => Ok(before.coord_at(offset)),
            _ => Err(BoardError::NotOneMoveApart(differing)),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            let label = (b'a' + row as u8) as char;
            write!(f, "{}{} ", " ".repeat(row), label)?;
            for cell in cells {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Per-(cell, color) key, a SplitMix64 finalisation of the packed inputs.
#[inline]
fn zobrist_key(coord: Coord, color: Color) -> u64 {
    let packed = ((coord.row as u64) << 34) | ((coord.col as u64) << 2) | color.to_u8() as u64;
    let mut z = packed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
