//! Value types: players, cells, board dimensions, moves, log entries.

mod cell;
mod color;
mod dimension;
mod moves;
mod orientation;

pub use cell::{Cell, CellParseError};
pub use color::Color;
pub use dimension::{Dimension, DimensionParseError};
pub use moves::{LogEntry, Move};
pub use orientation::Orientation;
