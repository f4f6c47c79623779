use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Recommendations (central panel)
// ---------------------------------------------------------------------------

/// Render the outcome of the last query.
pub fn results_panel(ui: &mut Ui, state: &AppState) {
    let Some(recs) = &state.results else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Answer the questions, then press Get Recommendations");
        });
        return;
    };

    if recs.is_empty() {
        ui.label(RichText::new(recs.summary()).color(Color32::from_rgb(230, 160, 40)));
        return;
    }

    ui.label(RichText::new(recs.summary()).color(Color32::from_rgb(80, 180, 100)));
    ui.add_space(6.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::exact(28.0))
        .column(Column::auto().at_least(180.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(60.0))
        .header(22.0, |mut header| {
            for title in ["#", "name", "genre", "type", "episodes", "rating"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (i, rec) in recs.records.iter().enumerate() {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(i.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&rec.name);
                    });
                    row.col(|ui| {
                        ui.label(&rec.genre);
                    });
                    row.col(|ui| {
                        let mut text = RichText::new(&rec.kind);
                        if let Some(cm) = &state.color_map {
                            text = text.color(cm.color_for(&rec.kind));
                        }
                        ui.label(text);
                    });
                    row.col(|ui| {
                        let episodes = rec
                            .episodes
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "?".to_string());
                        ui.label(episodes);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", rec.rating));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Fatal startup screen
// ---------------------------------------------------------------------------

/// Shown when no dataset could be loaded; the quiz is unavailable.
pub fn startup_failure(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.heading(RichText::new("Could not load the anime dataset").color(Color32::RED));
        ui.add_space(8.0);
        if let Some(msg) = &state.status_message {
            ui.label(msg);
        }
        ui.add_space(8.0);
        ui.label("Use File → Open data folder… to pick a folder with anime.csv and rating.csv.");
        ui.add(egui::Separator::default().spacing(16.0));
        ui.label(
            RichText::new("Set ANIME_QUIZ_DATA_DIR to choose the folder at startup.").weak(),
        );
    });
}
