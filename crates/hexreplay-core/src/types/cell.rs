//! Board coordinate (Cell)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell on the hex board, addressed by zero-based file and rank.
///
/// The canonical text form is `<file-letters><rank-digits>`: the file in
/// bijective base-26 lowercase (`a..z, aa..az, ba..`), the rank 1-based
/// decimal. `a1` is file 0, rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub file: u32,
    pub rank: u32,
}

/// Failure to parse a cell from its canonical text form.
///
/// Distinct from "not a cell token": the link tokenizer decides whether a
/// span looks like a cell at all before this parser runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed cell coordinate: {0:?}")]
pub struct CellParseError(pub String);

impl Cell {
    #[inline]
    pub const fn new(file: u32, rank: u32) -> Cell {
        Cell { file, rank }
    }

    /// Transpose file and rank, the cell's image under swap-pieces.
    #[inline]
    pub const fn transpose(self) -> Cell {
        Cell { file: self.rank, rank: self.file }
    }

    /// Bijective base-26 rendering of a file index (0 → "a", 26 → "aa").
    pub fn file_string(file: u32) -> String {
        // Iterative digit extraction, least significant letter first.
        let mut x = file;
        let mut buf = Vec::with_capacity(2);
        loop {
            buf.push(b'a' + (x % 26) as u8);
            if x < 26 {
                break;
            }
            x = x / 26 - 1;
        }
        buf.reverse();
        // buf holds only ASCII letters
        String::from_utf8(buf).unwrap_or_default()
    }

    /// Inverse of [`Cell::file_string`]; `None` for empty or non-lowercase
    /// input and for values past the `u32` range.
    pub fn file_from_str(s: &str) -> Option<u32> {
        if s.is_empty() {
            return None;
        }
        let mut value: u64 = 0;
        for c in s.chars() {
            if !c.is_ascii_lowercase() {
                return None;
            }
            value = value * 26 + (c as u64 - 'a' as u64 + 1);
            if value > u32::MAX as u64 {
                return None;
            }
        }
        Some((value - 1) as u32)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Cell::file_string(self.file), self.rank + 1)
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Cell, CellParseError> {
        let split = s.find(|c: char| !c.is_ascii_lowercase()).unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);
        let file =
            Cell::file_from_str(letters).ok_or_else(|| CellParseError(s.to_string()))?;
        // Canonical rank: 1-based decimal, no leading zeros.
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CellParseError(s.to_string()));
        }
        let rank: u32 = digits.parse().map_err(|_| CellParseError(s.to_string()))?;
        Ok(Cell::new(file, rank - 1))
    }
}
