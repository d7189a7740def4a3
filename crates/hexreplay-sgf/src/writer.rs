//! Record writing

use std::fmt::Write as _;

use hexreplay_core::{BoardView, Dimension, History};

/// Application/version tag written into the `AP` header property
pub(crate) const APP_TAG: &str = concat!("hexreplay:", env!("CARGO_PKG_VERSION"));

/// Serialize the full log, cursor-independent, as one SGF game tree.
pub fn write_record<V: BoardView>(history: &History<V>) -> String {
    let mut out = String::from("(;");
    write!(out, "AP[{APP_TAG}]FF[4]GM[11]SZ[{}]", size_value(history.initial_size()))
        .unwrap();
    for entry in history.log() {
        write!(out, ";{}[{}]", entry.player.letter(), entry.mv.token())
            .unwrap();
    }
    out.push(')');
    out
}

/// `SZ` value: single number when square, else `files:ranks`
pub(crate) fn size_value(size: Dimension) -> String {
    if size.is_square() {
        size.files().to_string()
    } else {
        format!("{}:{}", size.files(), size.ranks())
    }
}
