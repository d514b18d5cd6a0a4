use common::games::tictactoe::{BOARD_SIDE, GameView, Mark, StatusLine, TicTacToeGameCommand};
use eframe::egui;

use crate::config::BoardConfig;

pub fn to_color32(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Maps a pointer position inside the board rect to a row-major cell index.
pub fn cell_at(board_rect: egui::Rect, pos: egui::Pos2, cell_size: f32) -> Option<usize> {
    if !board_rect.contains(pos) {
        return None;
    }
    let col = ((pos.x - board_rect.left()) / cell_size) as usize;
    let row = ((pos.y - board_rect.top()) / cell_size) as usize;
    if col >= BOARD_SIDE || row >= BOARD_SIDE {
        return None;
    }
    Some(row * BOARD_SIDE + col)
}

pub struct BoardUi {
    cell_size: f32,
    highlight_color: egui::Color32,
    background_color: egui::Color32,
}

impl BoardUi {
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 4.0;

    pub fn new(config: &BoardConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            highlight_color: to_color32(config.highlight_color),
            background_color: to_color32(config.background_color),
        }
    }

    pub fn board_size(&self) -> f32 {
        self.cell_size * BOARD_SIDE as f32
    }

    fn cell_rect(&self, board_rect: egui::Rect, index: usize) -> egui::Rect {
        let col = index % BOARD_SIDE;
        let row = index / BOARD_SIDE;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * self.cell_size,
                board_rect.top() + row as f32 * self.cell_size,
            ),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    pub fn render(
        &self,
        ui: &mut egui::Ui,
        view: &GameView,
        commands: &mut Vec<TicTacToeGameCommand>,
    ) {
        let board_size = self.board_size();
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_size, board_size),
            egui::Sense::click(),
        );

        let painter = ui.painter();

        for cell in &view.cells {
            let cell_rect = self.cell_rect(rect, cell.index);
            let fill = if cell.highlighted {
                self.highlight_color
            } else {
                self.background_color
            };
            painter.rect_filled(cell_rect, 0.0, fill);

            match cell.mark {
                Mark::X => self.draw_x(painter, cell_rect),
                Mark::O => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        let accepting_moves = matches!(view.status, StatusLine::NextPlayer(_));
        if accepting_moves
            && let Some(hover_pos) = response.hover_pos()
            && let Some(index) = cell_at(rect, hover_pos, self.cell_size)
            && view.cells[index].mark.is_empty()
        {
            painter.rect_filled(
                self.cell_rect(rect, index),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * self.cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        // Clicks on finished games or filled cells still go through; the
        // controller decides whether they count.
        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
            && let Some(cell) = cell_at(rect, pos, self.cell_size)
        {
            commands.push(TicTacToeGameCommand::PlaceMark { cell });
        }
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let radius = rect.width() / 2.0 - rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(50, 50, 220));
        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_maps_row_major() {
        let rect = board_rect();
        assert_eq!(cell_at(rect, egui::pos2(15.0, 25.0), 100.0), Some(0));
        assert_eq!(cell_at(rect, egui::pos2(150.0, 25.0), 100.0), Some(1));
        assert_eq!(cell_at(rect, egui::pos2(150.0, 250.0), 100.0), Some(7));
        assert_eq!(cell_at(rect, egui::pos2(305.0, 315.0), 100.0), Some(8));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let rect = board_rect();
        assert_eq!(cell_at(rect, egui::pos2(5.0, 25.0), 100.0), None);
        assert_eq!(cell_at(rect, egui::pos2(150.0, 400.0), 100.0), None);
    }

    #[test]
    fn test_cell_rect_positions() {
        let board_ui = BoardUi::new(&BoardConfig::default());
        let rect = board_ui.cell_rect(board_rect(), 5);
        assert_eq!(rect.min, egui::pos2(210.0, 120.0));
        assert_eq!(rect.size(), egui::vec2(100.0, 100.0));
        assert_eq!(board_ui.board_size(), 300.0);
    }

    #[test]
    fn test_default_colors() {
        let board_ui = BoardUi::new(&BoardConfig::default());
        assert_eq!(board_ui.highlight_color, egui::Color32::YELLOW);
        assert_eq!(board_ui.background_color, egui::Color32::WHITE);
    }
}
