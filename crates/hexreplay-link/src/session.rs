//! History plus publish callback.
//!
//! The environment (a browser shell, the CLI) hands the session a
//! callback and gets the freshly encoded link after every completed
//! state-changing operation; failed operations publish nothing. The
//! callback is invoked synchronously at the end of the operation, never
//! interleaved with engine mutation.

use hexreplay_core::{BoardView, Dimension, History, HistoryError, Move};

use crate::writer::encode;

/// A history whose every state change republishes its encoded link.
pub struct Session<V: BoardView> {
    history: History<V>,
    publish: Box<dyn FnMut(&str)>,
}

impl<V: BoardView> Session<V> {
    pub fn new(history: History<V>, publish: impl FnMut(&str) + 'static) -> Session<V> {
        Session { history, publish: Box::new(publish) }
    }

    pub fn history(&self) -> &History<V> {
        &self.history
    }

    /// Current encoded link without republishing
    pub fn link(&self) -> String {
        encode(&self.history)
    }

    pub fn play(&mut self, mv: Move) -> Result<(), HistoryError> {
        self.history.play(mv)?;
        self.republish();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), HistoryError> {
        self.history.undo()?;
        self.republish();
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), HistoryError> {
        self.history.redo()?;
        self.republish();
        Ok(())
    }

    pub fn goto(&mut self, n: usize) -> Result<(), HistoryError> {
        let before = self.history.cursor();
        let result = self.history.goto(n);
        // goto clamps before reporting an inexact target; any movement
        // is a state change worth publishing
        if self.history.cursor() != before {
            self.republish();
        }
        result
    }

    pub fn set_size(&mut self, size: Dimension) -> Result<(), HistoryError> {
        self.history.set_size(size)?;
        self.republish();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.republish();
    }

    fn republish(&mut self) {
        let link = encode(&self.history);
        (self.publish)(&link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use hexreplay_core::{Cell, GridBoard};

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    fn session_with_log() -> (Session<GridBoard>, Rc<RefCell<Vec<String>>>) {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&published);
        let size = Dimension::DEFAULT;
        let session = Session::new(History::new(size, GridBoard::new(size)), move |link: &str| {
            sink.borrow_mut().push(link.to_string());
        });
        (session, published)
    }

    #[test]
    fn test_publish_after_each_change() {
        let (mut s, published) = session_with_log();
        s.play(Move::Place(cell("a1"))).unwrap();
        s.play(Move::SwapPieces).unwrap();
        s.undo().unwrap();
        assert_eq!(
            published.borrow().as_slice(),
            ["#11,a1", "#11,a1:s", "#11,a1,:s"]
        );
    }

    #[test]
    fn test_failed_operation_publishes_nothing() {
        let (mut s, published) = session_with_log();
        assert!(s.undo().is_err());
        assert!(s.play(Move::SwapPieces).is_err());
        assert!(s.set_size(Dimension::DEFAULT).is_err());
        assert!(published.borrow().is_empty());
    }

    #[test]
    fn test_inexact_goto_publishes_the_clamped_move() {
        let (mut s, published) = session_with_log();
        s.play(Move::Place(cell("a1"))).unwrap();
        s.goto(0).unwrap();
        assert!(s.goto(9).is_err());
        assert_eq!(published.borrow().last().unwrap(), "#11,a1");
    }
}
