use super::model::{AnimeRecord, AnimeTable, RawAnime};

/// Lower-case and trim a whole field value. Whitespace around individual
/// tags inside a comma-joined genre string is left alone.
pub fn clean_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Make a freshly loaded title comparison-ready.
pub fn normalize_record(raw: &RawAnime) -> AnimeRecord {
    let mut rec = AnimeRecord {
        name: raw.name.clone(),
        genre: raw.genre.clone(),
        kind: raw.kind.clone().unwrap_or_default(),
        episodes: raw.episodes,
        rating: raw.rating.unwrap_or(0.0),
    };
    normalize_fields(&mut rec);
    rec
}

/// Text normalisation shared by first load and [`AnimeTable::renormalize`].
fn normalize_fields(rec: &mut AnimeRecord) {
    rec.genre = clean_text(&rec.genre);
    rec.kind = clean_text(&rec.kind);
}

/// Build the queryable table from loader output, keeping row order.
pub fn normalize(rows: &[RawAnime]) -> AnimeTable {
    AnimeTable {
        records: rows.iter().map(normalize_record).collect(),
    }
}

impl AnimeTable {
    /// Apply text normalisation again. A no-op on a table built by
    /// [`normalize`].
    pub fn renormalize(&self) -> AnimeTable {
        let mut table = self.clone();
        table.records.iter_mut().for_each(normalize_fields);
        table
    }
}
