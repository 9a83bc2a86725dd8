mod app;
mod chart;
mod color;
mod data;
mod error;
mod export;
mod state;
mod ui;

use app::SeriesViewerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Viewer – Select and Visualize Series",
        options,
        Box::new(|_cc| Ok(Box::new(SeriesViewerApp::default()))),
    )
}
