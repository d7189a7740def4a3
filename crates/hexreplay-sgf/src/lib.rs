//! Portable game records for hexreplay.
//!
//! A finished (or unfinished) history serializes to a single SGF game
//! tree: `(;AP[hexreplay:x.y.z]FF[4]GM[11]SZ[11];B[a1];W[:s]...)`, one
//! node per log entry in order, always the full log regardless of where
//! the cursor sits. `GM[11]` is SGF's game code for Hex.
//!
//! Unlike the link codec, reading a record is strict: a record is a
//! document, not a fragile address-bar string, and a corrupt one is
//! reported rather than silently truncated.

mod reader;
mod writer;

pub use reader::{parse_record, GameRecord, SgfError};
pub use writer::write_record;
