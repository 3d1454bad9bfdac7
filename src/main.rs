use clap::Parser;
use customer_lens::app::CustomerLensApp;
use customer_lens::config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::parse();
    log::info!(
        "Starting with {} customers (seed: {:?})",
        config.count,
        config.seed
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Lens – Behaviour Analytics",
        options,
        Box::new(move |_cc| Ok(Box::new(CustomerLensApp::new(&config)))),
    )
}
