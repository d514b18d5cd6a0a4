//! Framework-independent snapshot of what the game window shows.

use std::fmt;

use super::game_state::TicTacToeGameState;
use super::types::{BOARD_CELLS, GameOutcome, Mark, Position};

pub const REVERSE_MOVES_LABEL: &str = "Reverse Moves";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    pub mark: Mark,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Winner(Mark),
    Draw,
    NextPlayer(Mark),
}

impl StatusLine {
    pub fn new(outcome: &GameOutcome, next_mark: Mark) -> Self {
        match outcome {
            GameOutcome::Won(line) => StatusLine::Winner(line.mark),
            GameOutcome::Draw => StatusLine::Draw,
            GameOutcome::InProgress => StatusLine::NextPlayer(next_mark),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Winner(mark) => write!(f, "Winner: {}", mark),
            StatusLine::Draw => write!(f, "It's a draw!"),
            StatusLine::NextPlayer(mark) => write!(f, "next player: {}", mark),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveListEntry {
    pub step: usize,
    /// Cell chosen at this step; `None` for the game start.
    pub location: Option<Position>,
    pub is_current: bool,
}

impl fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(position) => write!(f, "Go to move #{} ({})", self.step, position),
            None => write!(f, "Go to game start"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub cells: [CellView; BOARD_CELLS],
    pub status: StatusLine,
    pub move_list: Vec<MoveListEntry>,
}

impl GameView {
    pub fn from_state(state: &TicTacToeGameState) -> Self {
        let outcome = state.outcome();
        let board = state.current_board();
        let winning_cells = outcome.winning_cells();

        let cells = std::array::from_fn(|index| CellView {
            index,
            mark: board.cells()[index],
            highlighted: winning_cells.contains(&index),
        });

        let history = state.history();
        let current_step = state.current_step();
        let mut move_list: Vec<MoveListEntry> = (0..history.records().len())
            .map(|step| MoveListEntry {
                step,
                location: history.last_move_at(step).map(Position::from_index),
                is_current: step == current_step,
            })
            .collect();

        if state.moves_reversed() {
            move_list.reverse();
        }

        Self {
            cells,
            status: StatusLine::new(&outcome, state.next_mark()),
            move_list,
        }
    }
}
