// Round-trip law: encode∘decode reproduces dimension, orientation, log
// and cursor for any reachable history state.

use hexreplay_core::{Cell, Color, Dimension, GridBoard, History, Move, Orientation};
use hexreplay_link::{decode, encode};

fn cell(s: &str) -> Cell {
    s.parse().unwrap()
}

fn assert_roundtrip(h: &History<GridBoard>) {
    let link = encode(h);
    let back = decode(&link);
    assert_eq!(back.size(), h.size(), "size mismatch for {link}");
    assert_eq!(back.orientation(), h.orientation(), "orientation mismatch for {link}");
    assert_eq!(back.log(), h.log(), "log mismatch for {link}");
    assert_eq!(back.cursor(), h.cursor(), "cursor mismatch for {link}");
    assert_eq!(back.view(), h.view(), "board mismatch for {link}");
    // And the re-encoding is bit-identical
    assert_eq!(encode(&back), link);
}

#[test]
fn roundtrip_empty() {
    let size = Dimension::DEFAULT;
    assert_roundtrip(&History::new(size, GridBoard::new(size)));
}

#[test]
fn roundtrip_pie_rule_game() {
    let size = Dimension::new(6, 5).unwrap();
    let mut h = History::new(size, GridBoard::new(size));
    h.play(Move::Place(cell("d2"))).unwrap();
    assert_roundtrip(&h);
    h.play(Move::SwapPieces).unwrap();
    assert_roundtrip(&h);
    h.play(Move::Place(cell("a1"))).unwrap();
    h.play(Move::Pass).unwrap();
    assert_roundtrip(&h);
}

#[test]
fn roundtrip_every_cursor_position() {
    let size = Dimension::DEFAULT;
    let mut h = History::new(size, GridBoard::new(size));
    for mv in [
        Move::Place(cell("a1")),
        Move::SwapSides,
        Move::Place(cell("f6")),
        Move::Place(cell("k11")),
        Move::Resign(Color::Black),
    ] {
        h.play(mv).unwrap();
    }
    for n in (0..=h.log().len()).rev() {
        h.goto(n).unwrap();
        assert_roundtrip(&h);
    }
}

#[test]
fn roundtrip_orientation() {
    let size = Dimension::DEFAULT;
    let mut h = History::new(size, GridBoard::new(size));
    h.set_orientation(Orientation {
        rotation: Some(3),
        mirror: true,
        alt_labels: true,
        scheme: Some(1),
    });
    h.play(Move::Place(cell("b2"))).unwrap();
    h.undo().unwrap();
    assert_roundtrip(&h);
}

#[test]
fn swap_pieces_involution_via_undo_redo() {
    let size = Dimension::new(6, 5).unwrap();
    let mut h = History::new(size, GridBoard::new(size));
    h.play(Move::Place(cell("d2"))).unwrap();
    h.play(Move::SwapPieces).unwrap();
    let swapped_board = h.view().clone();
    let swapped_size = h.size();

    h.undo().unwrap();
    assert_eq!(h.size(), size);
    assert_eq!(h.view().stone(cell("d2")), Some(Color::Black));
    assert!(!h.view().pieces_swapped());

    h.redo().unwrap();
    assert_eq!(h.size(), swapped_size);
    assert_eq!(h.view(), &swapped_board);
}
