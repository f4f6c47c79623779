use std::collections::BTreeSet;

use super::model::{AnimeRecord, AnimeTable};

/// Maximum number of titles returned per query.
pub const PAGE_SIZE: usize = 10;

pub const MIN_RATING_RANGE: (f64, f64) = (0.0, 10.0);
pub const MAX_EPISODES_RANGE: (u32, u32) = (1, 1000);

pub const DEFAULT_MIN_RATING: f64 = 7.0;
pub const DEFAULT_MAX_EPISODES: u32 = 50;

pub const NO_MATCH_NOTICE: &str =
    "No anime matched all your preferences. Try relaxing a filter or two.";

// ---------------------------------------------------------------------------
// QueryFilter – one user interaction's preferences
// ---------------------------------------------------------------------------

/// What the user asked for. Built fresh for every query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    /// Selected genre tags. Empty selects nothing.
    pub genres: BTreeSet<String>,
    /// Selected type label, compared exactly.
    pub kind: String,
    /// Inclusive lower bound on rating.
    pub min_rating: f64,
    /// Inclusive upper bound on episodes; titles with unknown length always pass.
    pub max_episodes: u32,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            genres: BTreeSet::new(),
            kind: String::new(),
            min_rating: DEFAULT_MIN_RATING,
            max_episodes: DEFAULT_MAX_EPISODES,
        }
    }
}

impl QueryFilter {
    /// Build a filter, clamping the numeric bounds into their slider ranges.
    pub fn new<I, S>(genres: I, kind: &str, min_rating: f64, max_episodes: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (lo, hi) = MIN_RATING_RANGE;
        let min_rating = if min_rating.is_nan() {
            lo
        } else {
            min_rating.clamp(lo, hi)
        };
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
            kind: kind.to_string(),
            min_rating,
            max_episodes: max_episodes.clamp(MAX_EPISODES_RANGE.0, MAX_EPISODES_RANGE.1),
        }
    }

    /// At least one selected tag occurs as a substring of the genre field.
    pub fn genre_matches(&self, rec: &AnimeRecord) -> bool {
        self.genres.iter().any(|g| {
            let tag = g.trim();
            !tag.is_empty() && rec.genre.contains(tag)
        })
    }

    pub fn type_matches(&self, rec: &AnimeRecord) -> bool {
        rec.kind == self.kind
    }

    pub fn rating_matches(&self, rec: &AnimeRecord) -> bool {
        rec.rating >= self.min_rating
    }

    pub fn episodes_match(&self, rec: &AnimeRecord) -> bool {
        rec.episodes.map_or(true, |n| n <= f64::from(self.max_episodes))
    }

    /// All four clauses hold.
    pub fn matches(&self, rec: &AnimeRecord) -> bool {
        self.genre_matches(rec)
            && self.type_matches(rec)
            && self.rating_matches(rec)
            && self.episodes_match(rec)
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Result of one query: the top page plus how many titles matched in total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
    pub total_matches: usize,
    /// Best first, at most [`PAGE_SIZE`].
    pub records: Vec<AnimeRecord>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// The line shown above the results table, or the no-match notice.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            NO_MATCH_NOTICE.to_string()
        } else {
            format!(
                "Found {} matching anime! Showing top {}:",
                self.total_matches,
                self.records.len()
            )
        }
    }
}

/// Indices of matching records, in table order.
pub fn matching_indices(table: &AnimeTable, filter: &QueryFilter) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| filter.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Matching records sorted by rating, highest first, truncated to
/// [`PAGE_SIZE`]. Equal ratings keep table order.
pub fn evaluate(table: &AnimeTable, filter: &QueryFilter) -> Recommendations {
    let mut hits = matching_indices(table, filter);
    let total_matches = hits.len();

    // stable: ties stay in table order
    hits.sort_by(|&a, &b| {
        table.records[b]
            .rating
            .total_cmp(&table.records[a].rating)
    });
    hits.truncate(PAGE_SIZE);

    log::debug!(
        "query {:?}/{:?} rating>={} episodes<={}: {total_matches} matches",
        filter.genres,
        filter.kind,
        filter.min_rating,
        filter.max_episodes
    );

    Recommendations {
        total_matches,
        records: hits.into_iter().map(|i| table.records[i].clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, genre: &str, kind: &str, episodes: Option<f64>, rating: f64) -> AnimeRecord {
        AnimeRecord {
            name: name.to_string(),
            genre: genre.to_string(),
            kind: kind.to_string(),
            episodes,
            rating,
        }
    }

    fn table(records: Vec<AnimeRecord>) -> AnimeTable {
        AnimeTable { records }
    }

    fn comedy_tv(max_episodes: u32) -> QueryFilter {
        QueryFilter::new(["comedy"], "tv", 7.0, max_episodes)
    }

    #[test]
    fn matching_record_is_included() {
        let t = table(vec![rec("a", "action, comedy", "tv", Some(24.0), 8.2)]);
        let out = evaluate(&t, &comedy_tv(50));
        assert_eq!(out.total_matches, 1);
        assert_eq!(out.records[0].name, "a");
    }

    #[test]
    fn too_many_episodes_excludes() {
        let t = table(vec![rec("a", "action, comedy", "tv", Some(24.0), 8.2)]);
        let out = evaluate(&t, &comedy_tv(10));
        assert!(out.is_empty());
        assert!(out.records.is_empty());
    }

    #[test]
    fn unknown_episode_count_never_excludes() {
        let t = table(vec![rec("a", "comedy", "tv", None, 8.2)]);
        let out = evaluate(&t, &comedy_tv(1));
        assert_eq!(out.total_matches, 1);
    }

    #[test]
    fn bounds_are_inclusive() {
        let t = table(vec![rec("a", "comedy", "tv", Some(50.0), 7.0)]);
        assert_eq!(evaluate(&t, &comedy_tv(50)).total_matches, 1);
    }

    #[test]
    fn oversized_or_fractional_episode_counts_still_exclude() {
        let t = table(vec![
            rec("a", "comedy", "tv", Some(2000.5), 8.0),
            rec("b", "comedy", "tv", Some(1e10), 8.0),
            rec("c", "comedy", "tv", Some(1.5), 8.0),
        ]);
        let out = evaluate(&t, &comedy_tv(1));
        assert_eq!(out.total_matches, 0);
    }

    #[test]
    fn type_must_match_exactly() {
        let t = table(vec![
            rec("a", "comedy", "tv", Some(12.0), 8.0),
            rec("b", "comedy", "tv special", Some(1.0), 8.0),
        ]);
        let out = evaluate(&t, &comedy_tv(50));
        assert_eq!(out.total_matches, 1);
        assert_eq!(out.records[0].name, "a");
    }

    #[test]
    fn genre_match_is_substring_containment() {
        let t = table(vec![rec("a", "martial arts", "tv", Some(12.0), 8.0)]);
        let filter = QueryFilter::new(["arts"], "tv", 0.0, 1000);
        assert!(filter.matches(&t.records[0]));

        let padded = QueryFilter::new([" martial arts "], "tv", 0.0, 1000);
        assert!(padded.matches(&t.records[0]));
    }

    #[test]
    fn empty_genre_selection_matches_nothing() {
        let t = table(vec![rec("a", "comedy", "tv", Some(12.0), 9.0)]);
        let filter = QueryFilter::new(Vec::<String>::new(), "tv", 0.0, 1000);
        let out = evaluate(&t, &filter);
        assert_eq!(out.total_matches, 0);
        assert_eq!(out.summary(), NO_MATCH_NOTICE);

        let blank = QueryFilter::new(["  "], "tv", 0.0, 1000);
        assert!(!blank.matches(&t.records[0]));
    }

    #[test]
    fn ties_keep_table_order() {
        let mut records: Vec<AnimeRecord> = (0..8)
            .map(|i| rec(&format!("r{i}"), "comedy", "tv", Some(12.0), 7.5))
            .collect();
        records[3].rating = 9.0;
        records[7].rating = 9.0;
        records[5].rating = 9.5;
        let out = evaluate(&table(records), &comedy_tv(50));

        let names: Vec<&str> = out.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(&names[..3], ["r5", "r3", "r7"]);
    }

    #[test]
    fn results_are_sorted_and_truncated() {
        let records: Vec<AnimeRecord> = (0..25u32)
            .map(|i| rec(&format!("r{i}"), "comedy", "tv", Some(12.0), 7.0 + f64::from(i % 7) * 0.4))
            .collect();
        let out = evaluate(&table(records), &comedy_tv(50));

        assert_eq!(out.total_matches, 25);
        assert_eq!(out.records.len(), PAGE_SIZE);
        assert!(out.records.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(out.summary(), "Found 25 matching anime! Showing top 10:");
    }

    #[test]
    fn evaluation_is_deterministic() {
        let records: Vec<AnimeRecord> = (0..30u32)
            .map(|i| rec(&format!("r{i}"), "comedy, drama", "tv", Some(f64::from(i)), f64::from(i % 4) + 7.0))
            .collect();
        let t = table(records);
        let filter = comedy_tv(20);
        assert_eq!(evaluate(&t, &filter), evaluate(&t, &filter));
    }

    #[test]
    fn new_clamps_numeric_bounds() {
        let f = QueryFilter::new(["a"], "tv", 12.0, 0);
        assert_eq!(f.min_rating, 10.0);
        assert_eq!(f.max_episodes, 1);

        let f = QueryFilter::new(["a"], "tv", -3.0, 5000);
        assert_eq!(f.min_rating, 0.0);
        assert_eq!(f.max_episodes, 1000);
    }

    #[test]
    fn default_filter_uses_slider_defaults() {
        let f = QueryFilter::default();
        assert_eq!(f.min_rating, DEFAULT_MIN_RATING);
        assert_eq!(f.max_episodes, DEFAULT_MAX_EPISODES);
        assert!(f.genres.is_empty());
    }
}
