use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anime_quiz::data::query::{DEFAULT_MAX_EPISODES, DEFAULT_MIN_RATING};
use anime_quiz::data::{evaluate, load_dataset, DataPaths, Dataset, QueryFilter, Recommendations};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Arc<Dataset>>,

    /// Form inputs.
    pub selected_genres: BTreeSet<String>,
    pub selected_type: String,
    pub min_rating: f64,
    pub max_episodes: u32,

    /// Outcome of the last "Get Recommendations" click.
    pub results: Option<Recommendations>,

    /// Type label → colour for the results table and chart.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selected_genres: BTreeSet::new(),
            selected_type: String::new(),
            min_rating: DEFAULT_MIN_RATING,
            max_episodes: DEFAULT_MAX_EPISODES,
            results: None,
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Load through the process-wide cache; on failure keep whatever was
    /// loaded before and put the error in `status_message`.
    pub fn load(&mut self, paths: &DataPaths) {
        match load_dataset(paths) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Load `anime.csv` and `rating.csv` from a folder.
    pub fn load_dir(&mut self, dir: &Path) {
        self.load(&DataPaths::in_dir(dir));
    }

    /// Ingest a dataset, reset the form and colours.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.selected_genres.clear();
        self.selected_type = dataset.type_vocabulary().first().cloned().unwrap_or_default();
        self.color_map = Some(ColorMap::new(dataset.type_vocabulary()));
        self.results = None;
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Snapshot of the form as a query.
    pub fn filter(&self) -> QueryFilter {
        QueryFilter::new(
            self.selected_genres.iter().cloned(),
            &self.selected_type,
            self.min_rating,
            self.max_episodes,
        )
    }

    /// Run the query for the current form.
    pub fn recommend(&mut self) {
        if let Some(ds) = &self.dataset {
            let recs = evaluate(&ds.anime, &self.filter());
            log::info!("{}", recs.summary());
            self.results = Some(recs);
        }
    }

    /// Toggle a single genre in the selection.
    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.selected_genres.remove(genre) {
            self.selected_genres.insert(genre.to_string());
        }
    }

    /// Select every genre in the vocabulary.
    pub fn select_all_genres(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selected_genres = ds.genre_vocabulary().clone();
        }
    }

    pub fn select_no_genres(&mut self) {
        self.selected_genres.clear();
    }
}
