//! Record reading.
//!
//! The reader accepts the subset of SGF the writer produces, plus
//! whitespace between nodes. Parsing yields the header and the raw
//! `(player, move)` list; [`GameRecord::replay`] then feeds the moves
//! through the engine, which re-checks legality and turn attribution, so
//! a record that claims an impossible game is rejected rather than
//! replayed wrong.

use std::str::FromStr;

use thiserror::Error;

use hexreplay_core::{Color, Dimension, GridBoard, History, Move};

/// Failure to read or replay a game record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SgfError {
    #[error("syntax error at byte {0}")]
    Syntax(usize),

    #[error("record is not a Hex game (GM[{0}])")]
    NotHex(String),

    #[error("unsupported board size {0:?}")]
    BadSize(String),

    #[error("unreadable move token {0:?} in node {1}")]
    BadMove(String, usize),

    #[error("move {number} ({token:?}) is illegal at its position")]
    IllegalMove { number: usize, token: String },

    #[error("move {number} is recorded for the wrong player")]
    PlayerMismatch { number: usize },
}

/// Parsed but not yet replayed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub size: Dimension,
    pub moves: Vec<(Color, Move)>,
}

impl GameRecord {
    /// Rebuild the history by playing every recorded move in order.
    ///
    /// The engine recomputes each mover; a record whose `B`/`W` letters
    /// disagree with the replay is corrupt.
    pub fn replay(&self) -> Result<History<GridBoard>, SgfError> {
        let mut history = History::new(self.size, GridBoard::new(self.size));
        for (i, &(player, mv)) in self.moves.iter().enumerate() {
            let number = i + 1;
            history.play(mv).map_err(|_| SgfError::IllegalMove {
                number,
                token: mv.token(),
            })?;
            // A play may truncate a preceding terminal entry, so check
            // the entry just appended rather than indexing by number.
            match history.log().last() {
                Some(entry) if entry.player != player => {
                    return Err(SgfError::PlayerMismatch { number });
                }
                _ => {}
            }
        }
        Ok(history)
    }
}

/// Parse one SGF game tree as written by [`crate::write_record`].
pub fn parse_record(input: &str) -> Result<GameRecord, SgfError> {
    let mut p = Parser { bytes: input.as_bytes(), pos: 0 };

    p.skip_whitespace();
    p.expect(b'(')?;
    p.expect(b';')?;

    // Header node: property bag, order not significant
    let mut game = None;
    let mut size = None;
    loop {
        p.skip_whitespace();
        if !p.peek().is_some_and(|b| b.is_ascii_uppercase()) {
            break;
        }
        let (ident, value) = p.property()?;
        match ident.as_str() {
            "GM" => game = Some(value),
            "SZ" => size = Some(value),
            // AP, FF and anything else are informational
            _ => {}
        }
    }
    if let Some(gm) = game {
        if gm != "11" {
            return Err(SgfError::NotHex(gm));
        }
    }
    let size = match size {
        Some(value) => parse_size(&value).ok_or(SgfError::BadSize(value))?,
        None => Dimension::DEFAULT,
    };

    // Move nodes: `;B[token]` / `;W[token]`
    let mut moves = Vec::new();
    loop {
        p.skip_whitespace();
        if !p.eat(b';') {
            break;
        }
        p.skip_whitespace();
        let (ident, value) = p.property()?;
        let node = moves.len() + 1;
        let player = match ident.as_str() {
            "B" => Color::Black,
            "W" => Color::White,
            _ => return Err(SgfError::BadMove(ident, node)),
        };
        let mv = Move::from_token(&value).ok_or(SgfError::BadMove(value, node))?;
        moves.push((player, mv));
    }
    p.expect(b')')?;

    Ok(GameRecord { size, moves })
}

/// `SZ` value: `N` or `files:ranks`
fn parse_size(value: &str) -> Option<Dimension> {
    match value.split_once(':') {
        Some((f, r)) => Dimension::new(f.parse().ok()?, r.parse().ok()?),
        None => Dimension::square(value.parse().ok()?),
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, b: u8) -> Result<(), SgfError> {
        if self.eat(b) { Ok(()) } else { Err(SgfError::Syntax(self.pos)) }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// `IDENT[value]`; values never contain `]` in this dialect
    fn property(&mut self) -> Result<(String, String), SgfError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_uppercase()) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(SgfError::Syntax(self.pos));
        }
        let ident = String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned();

        self.expect(b'[')?;
        let vstart = self.pos;
        while self.peek().is_some_and(|b| b != b']') {
            self.pos += 1;
        }
        let value = String::from_utf8_lossy(&self.bytes[vstart..self.pos]).into_owned();
        self.expect(b']')?;
        Ok((ident, value))
    }
}

impl FromStr for GameRecord {
    type Err = SgfError;

    fn from_str(s: &str) -> Result<GameRecord, SgfError> {
        parse_record(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexreplay_core::Cell;

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_header_and_moves() {
        let record =
            parse_record("(;AP[hexreplay:0.2.0]FF[4]GM[11]SZ[6:5];B[a1];W[:s];B[c2])").unwrap();
        assert_eq!(record.size, Dimension::new(6, 5).unwrap());
        assert_eq!(
            record.moves,
            vec![
                (Color::Black, Move::Place(cell("a1"))),
                (Color::White, Move::SwapPieces),
                (Color::Black, Move::Place(cell("c2"))),
            ]
        );
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_missing_header() {
        let record = parse_record("( ;GM[11]SZ[11]\n ;B[a1]\n ;W[b2] )").unwrap();
        assert_eq!(record.size, Dimension::DEFAULT);
        assert_eq!(record.moves.len(), 2);

        // No SZ: default board
        let record = parse_record("(;GM[11];B[a1])").unwrap();
        assert_eq!(record.size, Dimension::DEFAULT);
    }

    #[test]
    fn test_parse_rejects_other_games() {
        assert_eq!(parse_record("(;GM[1]SZ[19])"), Err(SgfError::NotHex("1".into())));
    }

    #[test]
    fn test_parse_rejects_bad_size() {
        assert_eq!(parse_record("(;GM[11]SZ[0])"), Err(SgfError::BadSize("0".into())));
        assert_eq!(parse_record("(;GM[11]SZ[31:5])"), Err(SgfError::BadSize("31:5".into())));
    }

    #[test]
    fn test_parse_rejects_syntax_errors() {
        assert!(matches!(parse_record(""), Err(SgfError::Syntax(_))));
        assert!(matches!(parse_record("(;GM[11"), Err(SgfError::Syntax(_))));
        assert!(matches!(parse_record("(;GM[11];B[a1]"), Err(SgfError::Syntax(_))));
    }

    #[test]
    fn test_parse_rejects_bad_moves() {
        assert_eq!(
            parse_record("(;GM[11];B[xyzzy!])"),
            Err(SgfError::BadMove("xyzzy!".into(), 1))
        );
        assert_eq!(
            parse_record("(;GM[11];Q[a1])"),
            Err(SgfError::BadMove("Q".into(), 1))
        );
    }

    #[test]
    fn test_replay_checks_legality_and_players() {
        let record = parse_record("(;GM[11];B[a1];W[a1])").unwrap();
        assert_eq!(
            record.replay(),
            Err(SgfError::IllegalMove { number: 2, token: "a1".into() })
        );

        let record = parse_record("(;GM[11];B[a1];B[b2])").unwrap();
        assert_eq!(record.replay(), Err(SgfError::PlayerMismatch { number: 2 }));

        let record = parse_record("(;GM[11];B[a1];W[:S];W[b2])").unwrap();
        let history = record.replay().unwrap();
        assert_eq!(history.log().len(), 3);
        assert_eq!(history.cursor(), 3);
    }
}
