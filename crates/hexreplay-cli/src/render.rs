//! Plain-text rendering of the board and move list

use hexreplay_core::{BoardView, Cell, Color, GridBoard, History, Move};

/// Move list with the cursor position marked; redoable entries are the
/// ones a new play would discard.
pub fn history_lines(history: &History<GridBoard>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("board: {}", history.size()));
    lines.push(format!("to move: {}", color_name(history.to_move())));
    lines.push(format!("cursor: {} of {}", history.cursor(), history.log().len()));
    for (i, entry) in history.log().iter().enumerate() {
        let mark = if i < history.cursor() { ' ' } else { '*' };
        lines.push(format!(
            "{mark} {:>3}. {} {}",
            entry.number,
            entry.player.letter(),
            move_text(entry.mv)
        ));
    }
    lines
}

/// Hex board as a parallelogram, each rank shifted one half-cell
pub fn board_lines(board: &GridBoard) -> Vec<String> {
    let dim = board.dimensions();
    let mut lines = Vec::new();

    let mut header = String::from("    ");
    for file in 0..dim.files() {
        header.push_str(&format!("{:<2}", Cell::file_string(file)));
    }
    lines.push(header.trim_end().to_string());

    for rank in 0..dim.ranks() {
        let mut line = " ".repeat(rank as usize);
        line.push_str(&format!("{:>3} ", rank + 1));
        for file in 0..dim.files() {
            let glyph = match board.stone(Cell::new(file, rank)) {
                Some(Color::Black) => 'x',
                Some(Color::White) => 'o',
                None => '.',
            };
            line.push(glyph);
            line.push(' ');
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

fn move_text(mv: Move) -> String {
    match mv {
        // Resign and forfeit carry their own player; name it
        Move::Resign(p) => format!("resign ({})", color_name(p)),
        Move::Forfeit(p) => format!("forfeit ({})", color_name(p)),
        _ => mv.to_string(),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "Black",
        Color::White => "White",
    }
}
