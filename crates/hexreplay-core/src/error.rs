//! Error types for the history engine.
//!
//! Every engine operation is framed as succeed/fail: a failed operation
//! leaves the prior state untouched and nothing here is fatal. The
//! environment decides whether a failure is surfaced to the user (a click
//! on an occupied cell is typically just ignored).

use thiserror::Error;

use crate::types::Move;

/// Rejected history operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Move fails its legality precondition; log, cursor and board are
    /// unchanged and no view call was made
    #[error("illegal move: {0:?}")]
    IllegalMove(Move),

    /// Undo at cursor 0
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo with no redoable tail
    #[error("nothing to redo")]
    NothingToRedo,

    /// Navigation target past the end of the log
    #[error("move {target} out of range (log has {len} moves)")]
    OutOfRange { target: usize, len: usize },

    /// `set_size` with the current size and an empty log
    #[error("board size unchanged")]
    SizeUnchanged,
}
