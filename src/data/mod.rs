/// Data layer: core types, loading, normalisation and querying.
///
/// Architecture:
/// ```text
///  anime.csv + rating.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → Vec<RawAnime>, RatingTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  lower-case / trim text, default ratings → AnimeTable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  Arc<Dataset>, loaded once per process
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  QueryFilter → top-rated Recommendations
///   └──────────┘
/// ```

pub mod cache;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod query;

pub use cache::load_dataset;
pub use loader::DataPaths;
pub use model::{AnimeRecord, AnimeTable, Dataset, RatingTable, RawAnime};
pub use query::{evaluate, QueryFilter, Recommendations, PAGE_SIZE};
