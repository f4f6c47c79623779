use std::path::PathBuf;

use serde::Deserialize;

use crate::data::DataPaths;

/// Environment prefix for all settings, e.g. `ANIME_QUIZ_DATA_DIR`.
pub const ENV_PREFIX: &str = "ANIME_QUIZ_";

/// Application configuration loaded from environment variables
/// (and an optional `.env` file).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the two source tables.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name of the title-metadata table inside `data_dir`.
    #[serde(default = "default_anime_file")]
    pub anime_file: String,

    /// File name of the user-ratings table inside `data_dir`.
    #[serde(default = "default_rating_file")]
    pub rating_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_anime_file() -> String {
    "anime.csv".to_string()
}

fn default_rating_file() -> String {
    "rating.csv".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            anime_file: default_anime_file(),
            rating_file: default_rating_file(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `ANIME_QUIZ_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs.
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Locations of the two source tables.
    pub fn data_paths(&self) -> DataPaths {
        DataPaths::in_dir_with(&self.data_dir, &self.anime_file, &self.rating_file)
    }
}
