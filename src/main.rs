//! Icebreaker GUI
//!
//! A graphical two-player icebreaker game: move, break ice, trap your
//! opponent.

use icebreaker::ui::IcebreakerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 520.0])
            .with_min_inner_size([760.0, 500.0])
            .with_title("Icebreaker"),
        ..Default::default()
    };

    eframe::run_native(
        "Icebreaker",
        options,
        Box::new(|cc| Ok(Box::new(IcebreakerApp::new(cc)))),
    )
}
