//! Move variants and log entries

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Color};

/// One move of the game record.
///
/// `Place`, `Pass`, `SwapPieces` and `SwapSides` carry no player; their
/// player is whatever the history's turn computation says when they are
/// played. `Resign` and `Forfeit` name a player explicitly because either
/// side may resign regardless of whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Put a stone of the side to move on an empty cell
    Place(Cell),
    /// Decline to move
    Pass,
    /// Pie rule: take over the opening stone at the transposed cell,
    /// swapping the board axes
    SwapPieces,
    /// Pie rule: relabel which side owns the existing stones
    SwapSides,
    Resign(Color),
    Forfeit(Color),
}

impl Move {
    /// Whether this move ends the game as recorded (resign or forfeit).
    ///
    /// Terminal entries are an overlay on the position: they consume no
    /// turn and have no board effect, and a later play steps back over
    /// them instead of stacking on top.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Move::Resign(_) | Move::Forfeit(_))
    }

    /// Canonical move token, shared by the link and record codecs.
    ///
    /// Cells render as their coordinate text; every other move is a
    /// colon-prefixed tag so the tokenizers can tell them apart from
    /// cells without lookahead.
    pub fn token(self) -> String {
        match self {
            Move::Place(cell) => cell.to_string(),
            Move::Pass => ":p".to_string(),
            Move::SwapPieces => ":s".to_string(),
            Move::SwapSides => ":S".to_string(),
            Move::Resign(Color::Black) => ":rb".to_string(),
            Move::Resign(Color::White) => ":rw".to_string(),
            Move::Forfeit(Color::Black) => ":fb".to_string(),
            Move::Forfeit(Color::White) => ":fw".to_string(),
        }
    }

    /// Inverse of [`Move::token`] for a single complete token.
    pub fn from_token(s: &str) -> Option<Move> {
        match s {
            ":p" => Some(Move::Pass),
            ":s" => Some(Move::SwapPieces),
            ":S" => Some(Move::SwapSides),
            ":rb" => Some(Move::Resign(Color::Black)),
            ":rw" => Some(Move::Resign(Color::White)),
            ":fb" => Some(Move::Forfeit(Color::Black)),
            ":fw" => Some(Move::Forfeit(Color::White)),
            _ => s.parse().ok().map(Move::Place),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(cell) => write!(f, "{cell}"),
            Move::Pass => write!(f, "pass"),
            Move::SwapPieces => write!(f, "swap-pieces"),
            Move::SwapSides => write!(f, "swap-sides"),
            Move::Resign(_) => write!(f, "resign"),
            Move::Forfeit(_) => write!(f, "forfeit"),
        }
    }
}

/// One position of the move log: 1-based sequence number, the player the
/// move was attributed to, and the move itself. Entries are append-only;
/// the history truncates but never rewrites them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub number: usize,
    pub player: Color,
    pub mv: Move,
}

impl LogEntry {
    #[inline]
    pub const fn new(number: usize, player: Color, mv: Move) -> LogEntry {
        LogEntry { number, player, mv }
    }
}
