//! Board size (Dimension)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Cell;

/// Board size in files x ranks, each axis in `[1, 30]`.
///
/// Construction through [`Dimension::new`] is the single validation point;
/// an existing `Dimension` is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    files: u32,
    ranks: u32,
}

impl Dimension {
    /// Largest supported extent per axis
    pub const MAX: u32 = 30;

    /// Conventional Hex board size
    pub const DEFAULT: Dimension = Dimension { files: 11, ranks: 11 };

    #[inline]
    pub const fn new(files: u32, ranks: u32) -> Option<Dimension> {
        if files >= 1 && files <= Self::MAX && ranks >= 1 && ranks <= Self::MAX {
            Some(Dimension { files, ranks })
        } else {
            None
        }
    }

    /// Square board of the given side length
    #[inline]
    pub const fn square(n: u32) -> Option<Dimension> {
        Dimension::new(n, n)
    }

    #[inline]
    pub const fn files(self) -> u32 {
        self.files
    }

    #[inline]
    pub const fn ranks(self) -> u32 {
        self.ranks
    }

    #[inline]
    pub const fn is_square(self) -> bool {
        self.files == self.ranks
    }

    /// Exchange the two axes. Swap-pieces couples color with the short
    /// axis, so transposing the stones also transposes the board.
    #[inline]
    pub const fn swap(self) -> Dimension {
        Dimension { files: self.ranks, ranks: self.files }
    }

    /// Whether a cell lies on this board
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.file < self.files && cell.rank < self.ranks
    }

    /// Number of cells
    #[inline]
    pub const fn area(self) -> usize {
        (self.files * self.ranks) as usize
    }
}

impl Default for Dimension {
    fn default() -> Dimension {
        Dimension::DEFAULT
    }
}

/// Canonical text form: `N` when square, else `NxM`.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_square() {
            write!(f, "{}", self.files)
        } else {
            write!(f, "{}x{}", self.files, self.ranks)
        }
    }
}

/// Failure to parse a dimension from its canonical text form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed or out-of-range board size: {0:?}")]
pub struct DimensionParseError(pub String);

impl FromStr for Dimension {
    type Err = DimensionParseError;

    fn from_str(s: &str) -> Result<Dimension, DimensionParseError> {
        let err = || DimensionParseError(s.to_string());
        let (files, ranks) = match s.split_once('x') {
            Some((f, r)) => (parse_axis(f).ok_or_else(err)?, parse_axis(r).ok_or_else(err)?),
            None => {
                let n = parse_axis(s).ok_or_else(err)?;
                (n, n)
            }
        };
        Dimension::new(files, ranks).ok_or_else(err)
    }
}

/// Decimal axis value without leading zeros (`[1-9][0-9]*`).
fn parse_axis(s: &str) -> Option<u32> {
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
