use super::board::Board;
use super::types::{GameOutcome, Mark, WinningLine};

/// Rows, then columns, then diagonals. The first complete line wins.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(line) = check_win_with_line(board) {
        return GameOutcome::Won(line);
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            for mark in [X, O] {
                let mut cells = [E; 9];
                for index in line {
                    cells[index] = mark;
                }
                let outcome = evaluate(&Board::from_cells(cells));
                assert_eq!(outcome, GameOutcome::Won(WinningLine::new(mark, line)));
            }
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_win_ignores_remaining_cells() {
        let board = Board::from_cells([
            O, X, O,
            X, X, X,
            E, O, E,
        ]);
        assert_eq!(check_win_with_line(&board), Some(WinningLine::new(X, [3, 4, 5])));
        assert_eq!(check_win(&board), Some(X));
    }

    #[rustfmt::skip]
    #[test]
    fn test_first_line_in_order_wins() {
        // Unreachable by legal play: top row and left column both complete.
        let board = Board::from_cells([
            O, O, O,
            O, X, X,
            O, X, X,
        ]);
        assert_eq!(check_win_with_line(&board), Some(WinningLine::new(O, [0, 1, 2])));

        let board = Board::from_cells([
            X, O, O,
            X, O, E,
            X, E, O,
        ]);
        assert_eq!(check_win_with_line(&board), Some(WinningLine::new(X, [0, 3, 6])));
    }

    #[rustfmt::skip]
    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([
            X, X, O,
            O, O, X,
            X, X, O,
        ]);
        let outcome = evaluate(&board);
        assert_eq!(outcome, GameOutcome::Draw);
        assert!(outcome.winning_cells().is_empty());
    }

    #[rustfmt::skip]
    #[test]
    fn test_open_board_without_line_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);

        let board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, E,
        ]);
        assert_eq!(evaluate(&board), GameOutcome::InProgress);
    }

    #[rustfmt::skip]
    #[test]
    fn test_full_board_with_line_is_a_win() {
        let board = Board::from_cells([
            X, O, X,
            O, X, O,
            O, X, X,
        ]);
        assert_eq!(evaluate(&board).winner(), Some(X));
    }

    #[rustfmt::skip]
    #[test]
    fn test_evaluate_is_idempotent() {
        let board = Board::from_cells([
            X, E, O,
            E, X, O,
            E, E, X,
        ]);
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
