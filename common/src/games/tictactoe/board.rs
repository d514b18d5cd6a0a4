use super::types::{BOARD_CELLS, Mark};

/// A 3x3 board snapshot in row-major order. Placing a mark returns a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// `None` when `index` is off the board or already marked.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Board> {
        if !self.is_empty_at(index) {
            return None;
        }
        let mut cells = self.cells;
        cells[index] = mark;
        Some(Board { cells })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Some(Mark::Empty));
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.filled_count(), 1);
    }

    #[test]
    fn test_with_mark_rejects_taken_or_missing_cell() {
        let board = Board::new().with_mark(4, Mark::X).unwrap();
        assert_eq!(board.with_mark(4, Mark::O), None);
        assert_eq!(board.with_mark(9, Mark::O), None);
        assert_eq!(board.get(4), Some(Mark::X));
    }

    #[test]
    fn test_is_empty_at() {
        let board = Board::new()
            .with_mark(0, Mark::X)
            .and_then(|board| board.with_mark(8, Mark::O))
            .unwrap();
        assert!(!board.is_empty_at(0));
        assert!(board.is_empty_at(1));
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn test_is_full() {
        use crate::games::tictactoe::types::Mark::{O, X};
        assert!(!Board::new().is_full());
        assert!(Board::from_cells([X, O, X, O, X, O, O, X, O]).is_full());
    }
}
