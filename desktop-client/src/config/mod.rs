mod board_config;
mod config;
mod window_config;

pub use board_config::BoardConfig;
pub use config::{get_config_manager, Config};
pub use window_config::WindowConfig;
