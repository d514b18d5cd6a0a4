use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    /// X always opens, so the mark to play follows the parity of the step.
    pub fn for_step(step: usize) -> Mark {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Column/row form of a cell index, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index % BOARD_SIDE, index / BOARD_SIDE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Col: {}, Row: {}", self.col, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameOutcome {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Won(line) => Some(line.mark),
            _ => None,
        }
    }

    /// Cells to highlight; empty unless somebody won.
    pub fn winning_cells(&self) -> &[usize] {
        match self {
            GameOutcome::Won(line) => &line.cells,
            _ => &[],
        }
    }
}
