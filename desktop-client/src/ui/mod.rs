mod app;
mod board;
mod info_panel;

pub use app::TicTacToeApp;
