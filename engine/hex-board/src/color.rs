//! Stone colors and game rewards.

use std::fmt;

/// Contents of a single cell. `Red` and `Blue` double as the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Color {
    /// Both players, Red first.
    pub const PLAYERS: [Color; 2] = [Color::Red, Color::Blue];

    /// Swap Red and Blue.
    ///
    /// `Empty` has no opposite and is returned unchanged; callers only ask
    /// this of players.
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
            Color::Empty => Color::Empty,
        }
    }

    /// True for Red and Blue.
    #[inline]
    pub fn is_player(self) -> bool {
        self != Color::Empty
    }

    /// Grid encoding: 0=empty, 1=Red, 2=Blue
    #[inline]
    pub fn to_u8(self) -> u8 {
        match self {
            Color::Empty => 0,
            Color::Red => 1,
            Color::Blue => 2,
        }
    }

    /// Inverse of [`Color::to_u8`].
    pub fn from_u8(value: u8) -> Option<Color> {
        match value {
            0 => Some(Color::Empty),
            1 => Some(Color::Red),
            2 => Some(Color::Blue),
            _ => None,
        }
    }

    /// Single character used in board dumps.
    pub fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Red => 'R',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Empty => "empty",
            Color::Red => "red",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Reward for `player` once the game is decided.
///
/// Returns `1.0` if `player` won and `-1.0` otherwise. Hex has no draws, so
/// there is no neutral outcome.
#[inline]
pub fn reward(player: Color, winner: Color) -> f64 {
    if player == winner {
        1.0
    } else {
        -1.0
    }
}
