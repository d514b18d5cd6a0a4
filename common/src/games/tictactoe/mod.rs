mod board;
mod game_state;
mod history;
mod types;
mod view;
mod win_detector;

pub use board::Board;
pub use game_state::{TicTacToeGameCommand, TicTacToeGameState};
pub use history::{MoveHistory, MoveRecord};
pub use types::{BOARD_CELLS, BOARD_SIDE, GameOutcome, Mark, Position, WinningLine};
pub use view::{CellView, GameView, MoveListEntry, REVERSE_MOVES_LABEL, StatusLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
