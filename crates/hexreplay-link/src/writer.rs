//! Link encoding

use hexreplay_core::{BoardView, History, LogEntry};

/// Render a history as its shareable fragment string.
///
/// Layout: `#<dim><params>,<played>,<redoable>` with move tokens
/// concatenated inside each group and trailing commas stripped, so a
/// fresh board encodes as just `#11`.
pub fn encode<V: BoardView>(history: &History<V>) -> String {
    let mut out = String::from("#");
    out.push_str(&history.initial_size().to_string());

    let o = history.orientation();
    if let Some(r) = o.rotation {
        out.push('r');
        out.push_str(&r.to_string());
    }
    if o.mirror {
        out.push('m');
    }
    if o.alt_labels {
        out.push('n');
    }
    if let Some(c) = o.scheme {
        out.push('c');
        out.push_str(&c.to_string());
    }

    out.push(',');
    push_group(&mut out, history.played());
    out.push(',');
    push_group(&mut out, history.redoable());

    while out.ends_with(',') {
        out.pop();
    }
    out
}

fn push_group(out: &mut String, entries: &[LogEntry]) {
    for entry in entries {
        out.push_str(&entry.mv.token());
    }
}
