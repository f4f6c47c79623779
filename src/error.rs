use std::path::PathBuf;

/// Fatal dataset loading failures. There is no partial-dataset fallback:
/// any of these aborts the load.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },
}
