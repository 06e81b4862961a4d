//! Desktop entry point: tracing setup + window.

mod app;

use app::KlineApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Sina K-line Viewer"),
        ..Default::default()
    };
    eframe::run_native(
        "sinakline",
        options,
        Box::new(|_cc| Ok(Box::new(KlineApp::default()))),
    )
}
