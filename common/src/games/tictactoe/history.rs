use super::board::Board;
use super::types::Mark;

/// A board snapshot together with the cells chosen so far, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveRecord {
    pub board: Board,
    pub moves: Vec<usize>,
}

impl MoveRecord {
    /// Cell chosen by the move that produced this record.
    pub fn last_move(&self) -> Option<usize> {
        self.moves.last().copied()
    }
}

/// Snapshot log with a cursor. Entry 0 is always the empty board.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
    current_step: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::default()],
            current_step: 0,
        }
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current(&self) -> &MoveRecord {
        &self.records[self.current_step]
    }

    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    pub fn last_move_at(&self, step: usize) -> Option<usize> {
        self.records.get(step).and_then(MoveRecord::last_move)
    }

    /// Places the next mark on `cell`, dropping every record after the
    /// current step first. Returns `false` and keeps the log intact when
    /// `cell` is taken or off the board.
    pub fn record_move(&mut self, cell: usize) -> bool {
        let current = self.current();
        let Some(board) = current.board.with_mark(cell, self.next_mark()) else {
            return false;
        };
        let mut moves = current.moves.clone();
        moves.push(cell);

        self.records.truncate(self.current_step + 1);
        self.records.push(MoveRecord { board, moves });
        self.current_step = self.records.len() - 1;
        true
    }

    /// Moves the cursor; out-of-range steps leave it where it is.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.records.len() {
            return false;
        }
        self.current_step = step;
        true
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}
