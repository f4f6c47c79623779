use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::DatasetError;

use super::loader::{load_sources, DataPaths};
use super::model::Dataset;
use super::normalize::normalize;

/// Loaded datasets, keyed by source locations. Only successful loads are kept.
static CACHE: OnceLock<Mutex<HashMap<DataPaths, Arc<Dataset>>>> = OnceLock::new();

/// Load, normalise and index the dataset at `paths`, once per process.
///
/// Later calls with the same paths return the same shared, immutable
/// dataset without touching the files again.
pub fn load_dataset(paths: &DataPaths) -> Result<Arc<Dataset>, DatasetError> {
    let cache = CACHE.get_or_init(Default::default);
    let mut entries = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(ds) = entries.get(paths) {
        log::debug!("Dataset cache hit for {}", paths.anime.display());
        return Ok(Arc::clone(ds));
    }

    let dataset = Arc::new(build_dataset(paths)?);
    entries.insert(paths.clone(), Arc::clone(&dataset));
    Ok(dataset)
}

/// Uncached load + normalise.
pub fn build_dataset(paths: &DataPaths) -> Result<Dataset, DatasetError> {
    let (raw, ratings) = load_sources(paths)?;
    let anime = normalize(&raw);
    let dataset = Dataset::new(anime, ratings);
    log::info!(
        "Dataset ready: {} titles, {} genres, {} types",
        dataset.anime.len(),
        dataset.genre_vocabulary().len(),
        dataset.type_vocabulary().len()
    );
    Ok(dataset)
}
