//! Link decoding.
//!
//! Decoding is best-effort and never fails: a malformed or truncated link
//! yields the history of its longest valid prefix. Each move token is fed
//! through [`History::play`], so legality is enforced during the replay
//! itself and the first illegal or unreadable move silently ends the
//! parse.

use log::debug;

use hexreplay_core::{Cell, Color, Dimension, GridBoard, History, Move, Orientation};

use crate::scan::Scanner;

/// Decode a fragment string (with or without the leading `#`) into a
/// replayed history over a [`GridBoard`].
pub fn decode(input: &str) -> History<GridBoard> {
    let input = input.strip_prefix('#').unwrap_or(input);

    // The commas are group separators, not move tokens: head, played,
    // redoable. Any further text ends up in the redoable chunk, where
    // move scanning stops at the first byte that is not a token.
    let mut groups = input.splitn(3, ',');
    let head = groups.next().unwrap_or("");
    let played = groups.next().unwrap_or("");
    let redoable = groups.next().unwrap_or("");

    let (size, orientation) = parse_head(head);
    let mut history = History::new(size, GridBoard::new(size));
    history.set_orientation(orientation);

    if replay_group(&mut history, played) {
        let boundary = history.cursor();
        replay_group(&mut history, redoable);
        // Cannot be out of range: the boundary is a position we visited
        let _ = history.goto(boundary);
    }
    history
}

/// Dimension plus orientation parameters. A missing or unreadable
/// dimension falls back to the default board; the first unrecognized
/// parameter token ends parameter parsing without failing the decode.
fn parse_head(head: &str) -> (Dimension, Orientation) {
    let mut scanner = Scanner::new(head);
    let size = match parse_dimension(&mut scanner) {
        Some(size) => size,
        None => {
            debug!("unreadable dimension in {head:?}, using default");
            return (Dimension::DEFAULT, Orientation::default());
        }
    };

    let mut orientation = Orientation::default();
    loop {
        match scanner.peek() {
            Some(b'r') => {
                scanner.bump();
                match scanner.number() {
                    Some(n) => orientation.rotation = Some(n),
                    None => break,
                }
            }
            Some(b'm') => {
                scanner.bump();
                orientation.mirror = true;
            }
            Some(b'n') => {
                scanner.bump();
                orientation.alt_labels = true;
            }
            Some(b'c') => {
                scanner.bump();
                match scanner.number() {
                    Some(n) => orientation.scheme = Some(n),
                    None => break,
                }
            }
            // Unknown token or end of head: stop parameter parsing
            _ => break,
        }
    }
    (size, orientation)
}

/// `[1-9][0-9]*(x[1-9][0-9]*)?`, range-checked by `Dimension::new`
fn parse_dimension(scanner: &mut Scanner<'_>) -> Option<Dimension> {
    let files = scanner.number()?;
    let ranks = if scanner.eat(b'x') { scanner.number()? } else { files };
    Dimension::new(files, ranks)
}

/// Replay one move group. Returns whether the whole group was consumed;
/// a malformed token or rejected play stops the parse for good.
fn replay_group(history: &mut History<GridBoard>, group: &str) -> bool {
    let mut scanner = Scanner::new(group);
    while !scanner.is_done() {
        let mv = match scan_move(&mut scanner) {
            Some(mv) => mv,
            None => {
                debug!("unreadable move token, ignoring rest of link");
                return false;
            }
        };
        if history.play(mv).is_err() {
            debug!("illegal move {mv:?} in link, ignoring rest");
            return false;
        }
    }
    true
}

/// One move token: a cell (`[a-z]+[0-9]+`) or a colon-prefixed tag
fn scan_move(scanner: &mut Scanner<'_>) -> Option<Move> {
    if scanner.eat(b':') {
        return match scanner.bump()? {
            b's' => Some(Move::SwapPieces),
            b'S' => Some(Move::SwapSides),
            b'p' => Some(Move::Pass),
            b'r' => scan_player(scanner).map(Move::Resign),
            b'f' => scan_player(scanner).map(Move::Forfeit),
            _ => None,
        };
    }
    let letters = scanner.take_while(|b| b.is_ascii_lowercase());
    if letters.is_empty() {
        return None;
    }
    let rank = scanner.number()?;
    let file = Cell::file_from_str(letters)?;
    Some(Move::Place(Cell::new(file, rank - 1)))
}

/// `b` / `w` suffix of the resign and forfeit tags
fn scan_player(scanner: &mut Scanner<'_>) -> Option<Color> {
    match scanner.bump()? {
        b'b' => Some(Color::Black),
        b'w' => Some(Color::White),
        _ => None,
    }
}
