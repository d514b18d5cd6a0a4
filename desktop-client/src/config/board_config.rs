use common::config::{Validate, validate_range};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub cell_size: f32,
    /// Fill of the three cells that won the game, as `[r, g, b]`.
    pub highlight_color: [u8; 3],
    pub background_color: [u8; 3],
    #[serde(default)]
    pub start_with_moves_reversed: bool,
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        validate_range("board.cell_size", self.cell_size, 30.0, 200.0)?;
        if self.highlight_color == self.background_color {
            return Err("board.highlight_color must differ from board.background_color".to_string());
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            highlight_color: [255, 255, 0],
            background_color: [255, 255, 255],
            start_with_moves_reversed: false,
        }
    }
}
