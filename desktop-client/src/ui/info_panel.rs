use common::games::tictactoe::{GameView, MoveListEntry, REVERSE_MOVES_LABEL, TicTacToeGameCommand};
use eframe::egui;

fn entry_text(entry: &MoveListEntry) -> egui::RichText {
    let text = egui::RichText::new(entry.to_string());
    if entry.is_current { text.strong() } else { text }
}

pub fn render_info_panel(
    ui: &mut egui::Ui,
    view: &GameView,
    commands: &mut Vec<TicTacToeGameCommand>,
) {
    ui.heading(view.status.to_string());
    ui.add_space(8.0);

    if ui.button(REVERSE_MOVES_LABEL).clicked() {
        commands.push(TicTacToeGameCommand::ToggleMoveOrder);
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("move_list_scroll")
        .show(ui, |ui| {
            for entry in &view.move_list {
                if ui.button(entry_text(entry)).clicked() {
                    commands.push(TicTacToeGameCommand::JumpTo { step: entry.step });
                }
            }
        });
}
