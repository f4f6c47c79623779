use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::DatasetError;

use super::model::{RatingTable, RawAnime};

/// Columns the title table must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "genre", "type", "episodes", "rating"];

// ---------------------------------------------------------------------------
// Source locations
// ---------------------------------------------------------------------------

/// Where the two source tables live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPaths {
    pub anime: PathBuf,
    pub ratings: PathBuf,
}

impl DataPaths {
    /// `anime.csv` and `rating.csv` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::in_dir_with(dir, "anime.csv", "rating.csv")
    }

    pub fn in_dir_with(dir: &Path, anime_file: &str, rating_file: &str) -> Self {
        DataPaths {
            anime: dir.join(anime_file),
            ratings: dir.join(rating_file),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read both source tables. Any failure is fatal; nothing partial is returned.
pub fn load_sources(paths: &DataPaths) -> Result<(Vec<RawAnime>, RatingTable), DatasetError> {
    let anime = load_anime(&paths.anime)?;
    let ratings = load_ratings(&paths.ratings)?;
    log::info!(
        "Loaded {} titles from {} and {} user ratings from {}",
        anime.len(),
        paths.anime.display(),
        ratings.len(),
        paths.ratings.display()
    );
    Ok((anime, ratings))
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Reader::from_reader(file))
}

// ---------------------------------------------------------------------------
// Title table
// ---------------------------------------------------------------------------

/// Header row with at least `name, genre, type, episodes, rating`; extra
/// columns are ignored. Rows with no genre are dropped.
pub fn load_anime(path: &Path) -> Result<Vec<RawAnime>, DatasetError> {
    let mut reader = open_csv(path)?;
    let csv_err = |source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let mut idx = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, column) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| DatasetError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })?;
    }
    let [name_idx, genre_idx, type_idx, episodes_idx, rating_idx] = idx;

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = result.map_err(csv_err)?;

        let Some(genre) = non_blank(record.get(genre_idx)) else {
            dropped += 1;
            continue;
        };

        rows.push(RawAnime {
            name: record.get(name_idx).unwrap_or("").to_string(),
            genre: genre.to_string(),
            kind: non_blank(record.get(type_idx)).map(str::to_string),
            episodes: record.get(episodes_idx).and_then(parse_episodes),
            rating: record.get(rating_idx).and_then(parse_rating),
        });
    }

    if dropped > 0 {
        log::debug!("{}: dropped {dropped} rows without a genre", path.display());
    }
    Ok(rows)
}

fn non_blank(cell: Option<&str>) -> Option<&str> {
    cell.filter(|s| !s.trim().is_empty())
}

/// Any number is kept as-is, fractional or out of range included; only cells
/// that do not parse ("Unknown", "", "NaN") are absent.
pub fn parse_episodes(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Finite, non-negative scores; anything else is treated as absent.
pub fn parse_rating(s: &str) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    // `-0` would otherwise sort below `0` under `total_cmp`
    (v.is_finite() && v >= 0.0).then_some(v + 0.0)
}

// ---------------------------------------------------------------------------
// Ratings table
// ---------------------------------------------------------------------------

/// Any header plus rows; each row must have as many fields as the header.
pub fn load_ratings(path: &Path) -> Result<RatingTable, DatasetError> {
    let mut reader = open_csv(path)?;
    let csv_err = |source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_err)?;

    Ok(RatingTable { headers, records })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn drops_rows_without_genre_and_coerces_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "anime.csv",
            "anime_id,name,genre,type,episodes,rating,members\n\
             1,Alpha,\"Action, Comedy\",TV,24,8.2,100\n\
             2,Beta,,Movie,1,7.0,50\n\
             3,Gamma,Drama,OVA,Unknown,,10\n\
             4,Delta,\"  \",TV,12,6.0,5\n\
             5,Epsilon,Music,,12.0,abc,1\n",
        );

        let rows = load_anime(&path).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Gamma", "Epsilon"]);

        assert_eq!(rows[0].genre, "Action, Comedy");
        assert_eq!(rows[0].kind.as_deref(), Some("TV"));
        assert_eq!(rows[0].episodes, Some(24.0));
        assert_eq!(rows[0].rating, Some(8.2));

        assert_eq!(rows[1].episodes, None);
        assert_eq!(rows[1].rating, None);

        assert_eq!(rows[2].kind, None);
        assert_eq!(rows[2].episodes, Some(12.0));
        assert_eq!(rows[2].rating, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "anime.csv", "name,genre,type,rating\nA,Action,TV,7\n");

        let err = load_anime(&path).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn { column: "episodes", .. }
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_anime(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn ragged_rating_rows_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "rating.csv", "user_id,anime_id,rating\n1,2,8\n1,3\n");

        let err = load_ratings(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Csv { .. }));
    }

    #[test]
    fn ratings_are_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "rating.csv", "user_id,anime_id,rating\n1,2,8\n1,3,-1\n");

        let table = load_ratings(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.headers.get(2), Some("rating"));
        assert_eq!(table.records[1].get(2), Some("-1"));
    }

    #[test]
    fn episode_and_rating_coercion() {
        assert_eq!(parse_episodes("26"), Some(26.0));
        assert_eq!(parse_episodes(" 3.0 "), Some(3.0));
        assert_eq!(parse_episodes("2000.5"), Some(2000.5));
        assert_eq!(parse_episodes("1e10"), Some(1e10));
        assert_eq!(parse_episodes("-1"), Some(-1.0));
        assert_eq!(parse_episodes("Unknown"), None);
        assert_eq!(parse_episodes("NaN"), None);
        assert_eq!(parse_episodes(""), None);

        assert_eq!(parse_rating("9.37"), Some(9.37));
        assert_eq!(parse_rating("NaN"), None);
        assert_eq!(parse_rating("-2"), None);

        let zero = parse_rating("-0").unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
        assert_eq!(parse_rating(""), None);
    }
}
