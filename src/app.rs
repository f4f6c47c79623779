use anime_quiz::config::AppConfig;
use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AnimeQuizApp {
    pub state: AppState,
}

impl AnimeQuizApp {
    /// Load the configured dataset up front. A failure leaves the app on the
    /// startup-error screen.
    pub fn new(config: &AppConfig) -> Self {
        let mut state = AppState::default();
        state.load(&config.data_paths());
        Self { state }
    }
}

impl eframe::App for AnimeQuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        if self.state.dataset.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                results::startup_failure(ui, &self.state);
            });
            return;
        }

        // ---- Left side panel: quiz form ----
        egui::SidePanel::left("quiz_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: rating chart ----
        if self.state.results.as_ref().is_some_and(|r| !r.is_empty()) {
            egui::TopBottomPanel::bottom("rating_chart")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    plot::rating_chart(ui, &self.state);
                });
        }

        // ---- Central panel: results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::results_panel(ui, &self.state);
        });
    }
}
