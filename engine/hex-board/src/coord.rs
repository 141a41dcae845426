//! Cell coordinates and the `"c3"` move notation.

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// A cell position, 0-indexed. Whether it lies on a particular board is
/// checked by the board, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Letter for the row, number for the column: `Coord::new(2, 3)` is `c3`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row < 26 {
            write!(f, "{}{}", (b'a' + self.row as u8) as char, self.col)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidNotation(s.to_string());
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(invalid());
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let col = digits.parse::<usize>().map_err(|_| invalid())?;

        Ok(Coord::new((letter as u8 - b'a') as usize, col))
    }
}
