//! Tic-Tac-Toe GUI
//!
//! A graphical tic-tac-toe game against a minimax AI.

use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Tic-Tac-Toe - Minimax AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
