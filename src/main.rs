//! Tic-Tac-Toe GUI
//!
//! A graphical interface for playing Tic-Tac-Toe against the minimax engine.

use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([600.0, 460.0])
            .with_title("Tic-Tac-Toe (Minimax)"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
