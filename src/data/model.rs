use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// RawAnime – one row of the title table as loaded, before normalisation
// ---------------------------------------------------------------------------

/// A title row straight out of the loader. Rows without a genre never get
/// this far, so `genre` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAnime {
    pub name: String,
    /// Comma-joined genre tags, original casing.
    pub genre: String,
    pub kind: Option<String>,
    /// `None` only when the source cell did not parse as a number.
    pub episodes: Option<f64>,
    pub rating: Option<f64>,
}

// ---------------------------------------------------------------------------
// AnimeRecord – one normalised, queryable row
// ---------------------------------------------------------------------------

/// A normalised title: text fields lower-cased and trimmed, rating total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimeRecord {
    /// Not guaranteed unique.
    pub name: String,
    /// Lower-case, comma-joined genre tags.
    pub genre: String,
    /// Lower-case type label; empty when the source had none.
    #[serde(rename = "type")]
    pub kind: String,
    pub episodes: Option<f64>,
    /// Always present and non-negative.
    pub rating: f64,
}

impl AnimeRecord {
    /// Individual genre tags, trimmed, empty tags skipped.
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// The normalised title table, in original file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimeTable {
    pub records: Vec<AnimeRecord>,
}

impl AnimeTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Individual user ratings. Loaded and kept, but not consulted by queries.
#[derive(Debug, Clone, Default)]
pub struct RatingTable {
    pub headers: csv::StringRecord,
    pub records: Vec<csv::StringRecord>,
}

impl RatingTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Both tables plus the pick-lists derived from them.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub anime: AnimeTable,
    pub ratings: RatingTable,
    genre_vocabulary: BTreeSet<String>,
    type_vocabulary: Vec<String>,
}

impl Dataset {
    /// Derive the genre and type vocabularies from a normalised table.
    pub fn new(anime: AnimeTable, ratings: RatingTable) -> Self {
        let genre_vocabulary: BTreeSet<String> = anime
            .records
            .iter()
            .flat_map(|rec| rec.genre_tags())
            .map(str::to_string)
            .collect();

        let mut type_vocabulary: Vec<String> = Vec::new();
        for rec in &anime.records {
            if !rec.kind.is_empty() && !type_vocabulary.contains(&rec.kind) {
                type_vocabulary.push(rec.kind.clone());
            }
        }

        Dataset {
            anime,
            ratings,
            genre_vocabulary,
            type_vocabulary,
        }
    }

    /// Sorted unique genre tags.
    pub fn genre_vocabulary(&self) -> &BTreeSet<String> {
        &self.genre_vocabulary
    }

    /// Unique type labels in order of first appearance.
    pub fn type_vocabulary(&self) -> &[String] {
        &self.type_vocabulary
    }
}
