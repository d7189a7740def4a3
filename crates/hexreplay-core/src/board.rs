//! Board-view collaborator.
//!
//! The history engine does not own a board representation; it drives an
//! implementation of [`BoardView`] and calls exactly one effect method per
//! play/undo/redo step, matching the move kind. [`GridBoard`] is the
//! in-memory implementation used by the codecs, the CLI and the tests; a
//! renderer wires its own view in the same way.

use crate::types::{Cell, Color, Dimension};

/// The view the engine keeps in step with the log.
///
/// `apply_pieces_swap` and `apply_sides_swap` must be involutions:
/// applying either twice restores the previous board, which is what makes
/// undoing a swap the same call as playing it.
pub trait BoardView {
    /// Paint a stone on an empty cell
    fn place_stone(&mut self, cell: Cell, color: Color);

    /// Remove the stone from a cell
    fn clear_stone(&mut self, cell: Cell);

    /// Pie rule: transpose every stone to `(rank, file)`, flip its color
    /// and swap the board axes
    fn apply_pieces_swap(&mut self);

    /// Pie rule: relabel which side the existing stones belong to,
    /// leaving the geometry alone
    fn apply_sides_swap(&mut self);

    /// Whether a cell holds no stone
    fn is_empty(&self, cell: Cell) -> bool;

    /// Current board size
    fn dimensions(&self) -> Dimension;

    /// Reset to an empty board of the given size (used by `set_size`)
    fn set_dimensions(&mut self, dim: Dimension);
}

/// Occupancy-grid implementation of [`BoardView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    size: Dimension,
    stones: Vec<Option<Color>>,
    pieces_swapped: bool,
    sides_swapped: bool,
}

impl GridBoard {
    pub fn new(size: Dimension) -> GridBoard {
        GridBoard {
            size,
            stones: vec![None; size.area()],
            pieces_swapped: false,
            sides_swapped: false,
        }
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        (cell.rank * self.size.files() + cell.file) as usize
    }

    /// Stone on a cell, if any
    pub fn stone(&self, cell: Cell) -> Option<Color> {
        if self.size.contains(cell) {
            self.stones[self.index(cell)]
        } else {
            None
        }
    }

    /// All stones in rank-major order
    pub fn stones(&self) -> impl Iterator<Item = (Cell, Color)> + '_ {
        let files = self.size.files();
        self.stones.iter().enumerate().filter_map(move |(i, s)| {
            s.map(|color| (Cell::new(i as u32 % files, i as u32 / files), color))
        })
    }

    pub fn is_blank(&self) -> bool {
        self.stones.iter().all(Option::is_none)
    }

    /// Set after an odd number of pieces swaps
    pub fn pieces_swapped(&self) -> bool {
        self.pieces_swapped
    }

    /// Set after an odd number of sides swaps
    pub fn sides_swapped(&self) -> bool {
        self.sides_swapped
    }
}

impl BoardView for GridBoard {
    fn place_stone(&mut self, cell: Cell, color: Color) {
        debug_assert!(self.size.contains(cell));
        let i = self.index(cell);
        self.stones[i] = Some(color);
    }

    fn clear_stone(&mut self, cell: Cell) {
        if self.size.contains(cell) {
            let i = self.index(cell);
            self.stones[i] = None;
        }
    }

    fn apply_pieces_swap(&mut self) {
        let swapped = self.size.swap();
        let mut stones = vec![None; swapped.area()];
        for rank in 0..self.size.ranks() {
            for file in 0..self.size.files() {
                if let Some(color) = self.stones[(rank * self.size.files() + file) as usize] {
                    // Transposed cell, opposite color
                    stones[(file * swapped.files() + rank) as usize] = Some(!color);
                }
            }
        }
        self.size = swapped;
        self.stones = stones;
        self.pieces_swapped = !self.pieces_swapped;
    }

    fn apply_sides_swap(&mut self) {
        self.sides_swapped = !self.sides_swapped;
    }

    fn is_empty(&self, cell: Cell) -> bool {
        self.stone(cell).is_none()
    }

    fn dimensions(&self) -> Dimension {
        self.size
    }

    fn set_dimensions(&mut self, dim: Dimension) {
        *self = GridBoard::new(dim);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(f: u32, r: u32) -> Dimension {
        Dimension::new(f, r).unwrap()
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = GridBoard::new(dim(6, 5));
        let cell = Cell::new(2, 3);
        assert!(board.is_empty(cell));
        board.place_stone(cell, Color::Black);
        assert_eq!(board.stone(cell), Some(Color::Black));
        assert!(!board.is_empty(cell));
        assert_eq!(board.stones().collect::<Vec<_>>(), vec![(cell, Color::Black)]);
        board.clear_stone(cell);
        assert!(board.is_blank());
    }

    #[test]
    fn test_out_of_range_is_not_empty_stone() {
        let board = GridBoard::new(dim(6, 5));
        // Off-board cells report empty; legality rejects them by range.
        assert!(board.is_empty(Cell::new(6, 0)));
        assert_eq!(board.stone(Cell::new(0, 5)), None);
    }

    #[test]
    fn test_pieces_swap_transposes_and_recolors() {
        let mut board = GridBoard::new(dim(6, 5));
        board.place_stone(Cell::new(4, 1), Color::Black);
        board.apply_pieces_swap();

        assert_eq!(board.dimensions(), dim(5, 6));
        assert!(board.pieces_swapped());
        assert_eq!(board.stone(Cell::new(1, 4)), Some(Color::White));
        assert!(board.is_empty(Cell::new(4, 1)));
    }

    #[test]
    fn test_pieces_swap_involution() {
        let mut board = GridBoard::new(dim(6, 5));
        board.place_stone(Cell::new(0, 0), Color::Black);
        board.place_stone(Cell::new(3, 2), Color::White);
        let before = board.clone();

        board.apply_pieces_swap();
        assert_ne!(board, before);
        board.apply_pieces_swap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_sides_swap_involution() {
        let mut board = GridBoard::new(dim(6, 5));
        board.place_stone(Cell::new(1, 1), Color::Black);
        board.apply_sides_swap();
        assert!(board.sides_swapped());
        // Geometry untouched
        assert_eq!(board.stone(Cell::new(1, 1)), Some(Color::Black));
        board.apply_sides_swap();
        assert!(!board.sides_swapped());
    }

    #[test]
    fn test_set_dimensions_resets() {
        let mut board = GridBoard::new(dim(6, 5));
        board.place_stone(Cell::new(0, 0), Color::Black);
        board.apply_sides_swap();
        board.set_dimensions(dim(11, 11));
        assert_eq!(board.dimensions(), dim(11, 11));
        assert!(board.is_blank());
        assert!(!board.sides_swapped());
    }
}
