mod app;
mod color;
mod state;
mod ui;

use anime_quiz::config::AppConfig;
use app::AnimeQuizApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        log::warn!("{e:#}; falling back to defaults");
        AppConfig::default()
    });
    let app = AnimeQuizApp::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Anime Preference Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
