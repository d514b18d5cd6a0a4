use common::config::{Validate, validate_range};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        validate_range("window.width", self.width, 200.0, 4000.0)?;
        validate_range("window.height", self.height, 200.0, 4000.0)?;
        if self.title.trim().is_empty() {
            return Err("window.title must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 420.0,
            title: "Tic-Tac-Toe".to_string(),
        }
    }
}
