//! Side to move (Color)

use serde::{Deserialize, Serialize};

/// One of the two sides of a Hex game.
///
/// Black connects the top and bottom edges, White the left and right; the
/// engine only cares that Black moves first and that the sides alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Number of sides
    pub const NUM: usize = 2;

    /// The other side
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Index for array access
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-letter label used by the record format ("B" / "W")
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    /// Inverse of [`Color::letter`], case-sensitive
    #[inline]
    pub const fn from_letter(c: char) -> Option<Color> {
        match c {
            'B' => Some(Color::Black),
            'W' => Some(Color::White),
            _ => None,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}
