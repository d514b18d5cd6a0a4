use crate::log;

use super::board::Board;
use super::history::MoveHistory;
use super::types::{BOARD_CELLS, GameOutcome, Mark};
use super::win_detector::evaluate;

/// User intents the presentation layer hands to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeGameCommand {
    PlaceMark { cell: usize },
    JumpTo { step: usize },
    ToggleMoveOrder,
}

#[derive(Debug, Clone, Default)]
pub struct TicTacToeGameState {
    history: MoveHistory,
    moves_reversed: bool,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moves_reversed(moves_reversed: bool) -> Self {
        Self {
            history: MoveHistory::new(),
            moves_reversed,
        }
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn current_board(&self) -> &Board {
        &self.history.current().board
    }

    pub fn current_step(&self) -> usize {
        self.history.current_step()
    }

    pub fn next_mark(&self) -> Mark {
        self.history.next_mark()
    }

    pub fn moves_reversed(&self) -> bool {
        self.moves_reversed
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(self.current_board())
    }

    /// Returns `false` and changes nothing if the game is over or the cell is
    /// taken or off the board.
    pub fn apply_move(&mut self, cell: usize) -> bool {
        if cell >= BOARD_CELLS {
            log!("Ignoring move to cell {}: off the board", cell);
            return false;
        }

        let outcome = self.outcome();
        if !outcome.is_in_progress() {
            log!("Ignoring move to cell {}: game already over ({:?})", cell, outcome);
            return false;
        }

        if !self.current_board().is_empty_at(cell) {
            log!("Ignoring move to cell {}: already marked", cell);
            return false;
        }

        let mark = self.next_mark();
        let dropped = self.history.records().len() - 1 - self.current_step();
        if !self.history.record_move(cell) {
            return false;
        }

        if dropped > 0 {
            log!(
                "{} played cell {} at step {}, discarding {} later move(s)",
                mark,
                cell,
                self.current_step(),
                dropped
            );
        } else {
            log!("{} played cell {} at step {}", mark, cell, self.current_step());
        }
        true
    }

    pub fn jump_to_step(&mut self, step: usize) -> bool {
        if !self.history.jump_to(step) {
            log!(
                "Ignoring jump to step {}: history has {} entries",
                step,
                self.history.records().len()
            );
            return false;
        }
        log!("Jumped to step {}, {} to move", step, self.next_mark());
        true
    }

    pub fn toggle_move_order(&mut self) {
        self.moves_reversed = !self.moves_reversed;
        log!("Move list order reversed: {}", self.moves_reversed);
    }

    pub fn handle_command(&mut self, command: TicTacToeGameCommand) {
        match command {
            TicTacToeGameCommand::PlaceMark { cell } => {
                self.apply_move(cell);
            }
            TicTacToeGameCommand::JumpTo { step } => {
                self.jump_to_step(step);
            }
            TicTacToeGameCommand::ToggleMoveOrder => self.toggle_move_order(),
        }
    }
}
