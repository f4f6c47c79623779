use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use anime_quiz::data::query::{MAX_EPISODES_RANGE, MIN_RATING_RANGE};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the quiz form
// ---------------------------------------------------------------------------

/// Render the preference questions and the trigger button.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Anime Preference Quiz");
    ui.label("Answer a few questions to get personalized anime suggestions!");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Genres (multi-select) ----
            let all_genres = dataset.genre_vocabulary();
            let header_text = format!(
                "Which genres do you enjoy?  ({}/{})",
                state.selected_genres.len(),
                all_genres.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("genres")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_genres();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_genres();
                        }
                    });

                    ScrollArea::vertical()
                        .id_salt("genre_list")
                        .max_height(260.0)
                        .show(ui, |ui: &mut Ui| {
                            for genre in all_genres {
                                let mut checked = state.selected_genres.contains(genre);
                                if ui.checkbox(&mut checked, genre.as_str()).changed() {
                                    state.toggle_genre(genre);
                                }
                            }
                        });
                });
            ui.separator();

            // ---- Type (single select) ----
            ui.strong("What type of anime do you prefer?");
            egui::ComboBox::from_id_salt("anime_type")
                .selected_text(&state.selected_type)
                .show_ui(ui, |ui: &mut Ui| {
                    for kind in dataset.type_vocabulary() {
                        ui.selectable_value(&mut state.selected_type, kind.clone(), kind);
                    }
                });
            ui.separator();

            // ---- Numeric thresholds ----
            ui.strong("Minimum acceptable community rating (out of 10)");
            ui.add(egui::Slider::new(
                &mut state.min_rating,
                MIN_RATING_RANGE.0..=MIN_RATING_RANGE.1,
            ));
            ui.add_space(4.0);

            ui.strong("Preferred maximum number of episodes");
            ui.add(egui::Slider::new(
                &mut state.max_episodes,
                MAX_EPISODES_RANGE.0..=MAX_EPISODES_RANGE.1,
            ));
            ui.separator();

            if state.selected_genres.is_empty() {
                ui.label(
                    RichText::new("Pick at least one genre; an empty selection matches nothing.")
                        .small()
                        .weak(),
                );
            }

            let button = egui::Button::new(RichText::new("Get Recommendations").strong());
            if ui.add_sized([ui.available_width(), 32.0], button).clicked() {
                state.recommend();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }

            let can_export = state.results.as_ref().is_some_and(|r| !r.is_empty());
            if ui
                .add_enabled(can_export, egui::Button::new("Export results…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} titles, {} user ratings loaded",
                ds.anime.len(),
                ds.ratings.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open folder containing anime.csv and rating.csv")
        .pick_folder();

    if let Some(dir) = folder {
        state.load_dir(&dir);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let Some(recs) = &state.results else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export recommendations")
        .set_file_name("recommendations.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match anime_quiz::export::write_results(&path, &recs.records) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export results: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
