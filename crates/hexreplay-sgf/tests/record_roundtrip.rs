// Record round-trip law: writing a history and replaying the parsed
// record reconstructs an equivalent log.

use hexreplay_core::{Cell, Color, Dimension, GridBoard, History, Move};
use hexreplay_sgf::{parse_record, write_record};

fn cell(s: &str) -> Cell {
    s.parse().unwrap()
}

fn assert_record_roundtrip(h: &History<GridBoard>) {
    let record = write_record(h);
    let replayed = parse_record(&record).unwrap().replay().unwrap();
    assert_eq!(replayed.log(), h.log(), "log mismatch for {record}");
    // The replayed history sits at the end of the log; sizes agree from
    // the same starting point
    assert_eq!(replayed.initial_size(), h.initial_size());
    // The rewritten record is bit-identical
    assert_eq!(write_record(&replayed), record);
}

#[test]
fn roundtrip_plain_game() {
    let size = Dimension::DEFAULT;
    let mut h = History::new(size, GridBoard::new(size));
    for c in ["f6", "c2", "k11", "a1"] {
        h.play(Move::Place(cell(c))).unwrap();
    }
    assert_record_roundtrip(&h);
}

#[test]
fn roundtrip_pie_rule_and_resignation() {
    let size = Dimension::new(6, 5).unwrap();
    let mut h = History::new(size, GridBoard::new(size));
    h.play(Move::Place(cell("d2"))).unwrap();
    h.play(Move::SwapPieces).unwrap();
    h.play(Move::Place(cell("a1"))).unwrap();
    h.play(Move::Pass).unwrap();
    h.play(Move::Resign(Color::White)).unwrap();
    assert_record_roundtrip(&h);
}

#[test]
fn record_is_cursor_independent() {
    let size = Dimension::DEFAULT;
    let mut h = History::new(size, GridBoard::new(size));
    h.play(Move::Place(cell("a1"))).unwrap();
    h.play(Move::SwapSides).unwrap();
    h.play(Move::Place(cell("b2"))).unwrap();
    let at_end = write_record(&h);
    h.goto(1).unwrap();
    assert_eq!(write_record(&h), at_end);
    // Replaying still yields the full three-move log
    let replayed = parse_record(&at_end).unwrap().replay().unwrap();
    assert_eq!(replayed.log().len(), 3);
}
