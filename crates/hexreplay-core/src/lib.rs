//! Move-history engine for Hex game replays.
//!
//! This crate owns the linear move log of a Hex game and the cursor that
//! splits it into played and redoable halves. It computes whose turn it is
//! under the pie rule (swap-pieces / swap-sides) and resignation, checks
//! history-dependent legality, and drives a [`BoardView`] collaborator to
//! keep a board in step with every transition.
//!
//! Serialization of the history (URL-fragment links, SGF records) lives in
//! the sibling `hexreplay-link` and `hexreplay-sgf` crates.

pub mod board;
pub mod error;
pub mod history;
pub mod types;

// Re-export commonly used types
pub use board::{BoardView, GridBoard};
pub use error::HistoryError;
pub use history::History;
pub use types::{Cell, Color, Dimension, LogEntry, Move, Orientation};
