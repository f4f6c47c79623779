//! Anime preference quiz: load a title catalogue, normalise it once, and
//! answer "what should I watch?" queries against it.

pub mod config;
pub mod data;
pub mod error;
pub mod export;

pub use error::DatasetError;
