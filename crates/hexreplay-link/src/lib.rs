//! Compact link codec for hexreplay histories.
//!
//! A history serializes to a single-line string meant to live in a URL
//! fragment: `#<dim><params>,<played>,<redoable>`. The dimension is the
//! starting board size, the parameters carry display orientation, and the
//! two comma-separated groups hold the move tokens on either side of the
//! cursor. Decoding replays the tokens through the engine one by one, so
//! a corrupted link degrades to whatever prefix was valid instead of
//! failing.
//!
//! [`Session`] wraps a history together with a publish callback and
//! re-encodes after every completed state change, which is how the
//! environment keeps the address bar in step.

mod parser;
mod scan;
mod session;
mod writer;

pub use parser::decode;
pub use session::Session;
pub use writer::encode;
