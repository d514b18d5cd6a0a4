mod config;
mod ui;

use clap::Parser;
use common::games::tictactoe::TicTacToeGameState;
use common::{log, logger};
use eframe::egui;

use config::{Config, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tic_tac_toe_client")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(path: Option<&str>) -> Config {
    match get_config_manager(path).get_or_create_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, falling back to defaults: {}", e);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(args.config.as_deref());
    log!(
        "Starting with a {}x{} window, cell size {}",
        config.window.width,
        config.window.height,
        config.board.cell_size
    );

    let state = TicTacToeGameState::with_moves_reversed(config.board.start_with_moves_reversed);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(state, &config.board)))),
    )?;

    log!("Window closed");
    Ok(())
}
