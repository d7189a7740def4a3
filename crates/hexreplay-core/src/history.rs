//! The move-history engine.
//!
//! [`History`] owns the ordered move log and the cursor that splits it
//! into the played prefix and the redoable tail. Every mutation keeps the
//! injected [`BoardView`] in step by issuing exactly one effect call per
//! step crossed, and every operation runs to completion before the next:
//! there is no I/O, no suspension point and no interleaving of view calls
//! with engine state mutation.
//!
//! Truncation of the redoable tail happens in exactly one place, inside
//! [`History::play`]; a caller that wants to snapshot the tail before a
//! destructive play can compare [`History::cursor`] against the log
//! length immediately beforehand and copy [`History::redoable`].

use log::{debug, warn};

use crate::board::BoardView;
use crate::error::HistoryError;
use crate::types::{Color, Dimension, LogEntry, Move, Orientation};

/// Navigable move log of one Hex game.
#[derive(Debug, Clone, PartialEq)]
pub struct History<V: BoardView> {
    size: Dimension,
    orientation: Orientation,
    log: Vec<LogEntry>,
    cursor: usize,
    view: V,
}

impl<V: BoardView> History<V> {
    /// Empty history on a fresh board of the given size.
    pub fn new(size: Dimension, mut view: V) -> History<V> {
        view.set_dimensions(size);
        History { size, orientation: Orientation::default(), log: Vec::new(), cursor: 0, view }
    }

    /// Current board size. Tracks pieces swaps: playing or redoing
    /// swap-pieces exchanges the axes, undoing it exchanges them back.
    pub fn size(&self) -> Dimension {
        self.size
    }

    /// Board size before any move was played. A pieces swap exchanges
    /// the axes mid-game; serialization records the starting size and
    /// recovers the rest by replaying.
    pub fn initial_size(&self) -> Dimension {
        let swaps =
            self.played().iter().filter(|e| matches!(e.mv, Move::SwapPieces)).count();
        if swaps % 2 == 1 { self.size.swap() } else { self.size }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// The full log, played and redoable halves alike
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entries before the cursor, oldest first
    pub fn played(&self) -> &[LogEntry] {
        &self.log[..self.cursor]
    }

    /// Entries at or after the cursor; discarded by the next `play`
    pub fn redoable(&self) -> &[LogEntry] {
        &self.log[self.cursor..]
    }

    /// The board view the engine keeps in step with the log
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Side to move at the cursor.
    ///
    /// Walks back from the cursor: swap-sides hands the turn to the
    /// player recorded on the swap entry (the swap relabels who owns the
    /// existing stones, it does not advance alternation); resign and
    /// forfeit consume no turn at all, so they are skipped; any other
    /// entry alternates.
    pub fn to_move(&self) -> Color {
        self.player_at(self.cursor)
    }

    fn player_at(&self, cursor: usize) -> Color {
        let mut at = cursor;
        while at > 0 {
            let entry = &self.log[at - 1];
            match entry.mv {
                Move::SwapSides => return entry.player,
                Move::Resign(_) | Move::Forfeit(_) => at -= 1,
                _ => return entry.player.opponent(),
            }
        }
        Color::Black
    }

    /// Cursor position discounting any trailing resign/forfeit overlay
    fn effective_cursor(&self) -> usize {
        let mut at = self.cursor;
        while at > 0 && self.log[at - 1].mv.is_terminal() {
            at -= 1;
        }
        at
    }

    /// Whether a move may be played at the current cursor.
    ///
    /// Stone placements need an on-board, empty cell. The two pie-rule
    /// swaps are legal exactly as the response to the opening move:
    /// discounting a trailing resignation, one move has been played and
    /// it was a stone placement. Pass, resign and forfeit are always
    /// legal.
    pub fn is_legal(&self, mv: Move) -> bool {
        match mv {
            Move::Place(cell) => self.size.contains(cell) && self.view.is_empty(cell),
            Move::SwapPieces | Move::SwapSides => {
                self.effective_cursor() == 1 && matches!(self.log[0].mv, Move::Place(_))
            }
            Move::Pass | Move::Resign(_) | Move::Forfeit(_) => true,
        }
    }

    /// Play a move at the cursor, discarding any redoable tail.
    ///
    /// A move played on top of a resignation first steps the cursor back
    /// over the terminal entry, which the truncation then removes:
    /// resigning never permanently freezes the log.
    pub fn play(&mut self, mv: Move) -> Result<(), HistoryError> {
        if !self.is_legal(mv) {
            warn!("rejected illegal move {mv:?} at cursor {}", self.cursor);
            return Err(HistoryError::IllegalMove(mv));
        }
        if self.cursor > 0 && self.log[self.cursor - 1].mv.is_terminal() {
            // Terminal entries have no board effect; stepping back over
            // one is a pure cursor move.
            self.cursor -= 1;
        }
        self.log.truncate(self.cursor);

        let player = match mv {
            Move::Resign(p) | Move::Forfeit(p) => p,
            _ => self.to_move(),
        };
        let entry = LogEntry::new(self.cursor + 1, player, mv);
        self.log.push(entry);
        self.cursor += 1;
        self.apply(entry);
        debug!("played {}. {:?} {mv:?}", entry.number, entry.player);
        Ok(())
    }

    /// Step the cursor back over one entry, reverting its board effect
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        if self.cursor == 0 {
            return Err(HistoryError::NothingToUndo);
        }
        self.cursor -= 1;
        let entry = self.log[self.cursor];
        self.revert(entry);
        debug!("undid {}. {:?}", entry.number, entry.mv);
        Ok(())
    }

    /// Step the cursor forward over one entry, re-applying its effect
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        if self.cursor == self.log.len() {
            return Err(HistoryError::NothingToRedo);
        }
        let entry = self.log[self.cursor];
        self.cursor += 1;
        self.apply(entry);
        debug!("redid {}. {:?}", entry.number, entry.mv);
        Ok(())
    }

    /// Navigate to cursor position `n`, or as close as the log allows.
    /// Errs when `n` lies past the end, after stopping at the end.
    pub fn goto(&mut self, n: usize) -> Result<(), HistoryError> {
        let target = n.min(self.log.len());
        while self.cursor > target {
            self.undo()?;
        }
        while self.cursor < target {
            self.redo()?;
        }
        if n > self.log.len() {
            return Err(HistoryError::OutOfRange { target: n, len: self.log.len() });
        }
        Ok(())
    }

    /// Start over on a fresh board of a different size. Always clears the
    /// log; rejected as a no-op when the log is already empty and the
    /// size does not change.
    pub fn set_size(&mut self, size: Dimension) -> Result<(), HistoryError> {
        if size == self.size && self.log.is_empty() {
            return Err(HistoryError::SizeUnchanged);
        }
        debug!("resizing to {size}, clearing {} moves", self.log.len());
        self.size = size;
        self.log.clear();
        self.cursor = 0;
        self.view.set_dimensions(size);
        Ok(())
    }

    /// Empty the log and board, keeping the current size
    pub fn clear(&mut self) {
        self.log.clear();
        self.cursor = 0;
        self.view.set_dimensions(self.size);
    }

    /// Forward board effect of one entry: exactly one view call
    fn apply(&mut self, entry: LogEntry) {
        match entry.mv {
            Move::Place(cell) => self.view.place_stone(cell, entry.player),
            Move::SwapPieces => {
                self.size = self.size.swap();
                self.view.apply_pieces_swap();
            }
            Move::SwapSides => self.view.apply_sides_swap(),
            Move::Pass | Move::Resign(_) | Move::Forfeit(_) => {}
        }
    }

    /// Inverse board effect. The two swaps are involutions, so their
    /// inverse is the forward transform again.
    fn revert(&mut self, entry: LogEntry) {
        match entry.mv {
            Move::Place(cell) => self.view.clear_stone(cell),
            Move::SwapPieces => {
                self.size = self.size.swap();
                self.view.apply_pieces_swap();
            }
            Move::SwapSides => self.view.apply_sides_swap(),
            Move::Pass | Move::Resign(_) | Move::Forfeit(_) => {}
        }
    }
}
