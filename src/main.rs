mod app;
mod archive;
mod controller;
mod models;
mod ui;

use app::ZipperApp;

use tracing::info;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging with reasonable defaults
    tracing_subscriber::fmt::init();

    info!("Starting Zipper");

    let options = eframe::NativeOptions {
        vsync: true,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([300.0, 500.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "zipper - zip your folders",
        options,
        Box::new(|_| Ok(Box::<ZipperApp>::default())),
    )
}
