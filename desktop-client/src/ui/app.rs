use common::games::tictactoe::{GameView, TicTacToeGameCommand, TicTacToeGameState};
use eframe::egui;

use super::board::BoardUi;
use super::info_panel::render_info_panel;
use crate::config::BoardConfig;

pub struct TicTacToeApp {
    state: TicTacToeGameState,
    board_ui: BoardUi,
}

impl TicTacToeApp {
    const INFO_PANEL_WIDTH: f32 = 220.0;

    pub fn new(state: TicTacToeGameState, board_config: &BoardConfig) -> Self {
        Self {
            state,
            board_ui: BoardUi::new(board_config),
        }
    }

    /// Commands gathered during a frame are applied once the frame is drawn.
    fn apply_commands(&mut self, commands: Vec<TicTacToeGameCommand>) -> bool {
        let changed = !commands.is_empty();
        for command in commands {
            self.state.handle_command(command);
        }
        changed
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = GameView::from_state(&self.state);
        let mut commands = Vec::new();

        egui::SidePanel::right("game_info")
            .min_width(Self::INFO_PANEL_WIDTH)
            .show(ctx, |ui| {
                render_info_panel(ui, &view, &mut commands);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                self.board_ui.render(ui, &view, &mut commands);
            });
        });

        if self.apply_commands(commands) {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameOutcome, Mark};

    fn app() -> TicTacToeApp {
        TicTacToeApp::new(TicTacToeGameState::new(), &BoardConfig::default())
    }

    #[test]
    fn test_apply_commands_in_order() {
        let mut app = app();
        let changed = app.apply_commands(vec![
            TicTacToeGameCommand::PlaceMark { cell: 0 },
            TicTacToeGameCommand::PlaceMark { cell: 4 },
            TicTacToeGameCommand::JumpTo { step: 1 },
            TicTacToeGameCommand::PlaceMark { cell: 8 },
        ]);
        assert!(changed);
        assert_eq!(app.state.history().current().moves, vec![0, 8]);
        assert_eq!(app.state.next_mark(), Mark::X);
    }

    #[test]
    fn test_no_commands_means_no_repaint() {
        let mut app = app();
        assert!(!app.apply_commands(Vec::new()));
        assert_eq!(app.state.current_step(), 0);
    }

    #[test]
    fn test_clicks_after_win_are_ignored() {
        let mut app = app();
        app.apply_commands(
            [0, 4, 1, 5, 2, 8]
                .into_iter()
                .map(|cell| TicTacToeGameCommand::PlaceMark { cell })
                .collect(),
        );
        assert_eq!(app.state.outcome().winner(), Some(Mark::X));
        assert_eq!(app.state.history().records().len(), 6);
        assert_ne!(app.state.outcome(), GameOutcome::InProgress);
    }
}
