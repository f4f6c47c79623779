use std::path::PathBuf;

use anyhow::{Context, Result};

const GENRES: [&str; 14] = [
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Horror",
    "Martial Arts",
    "Mecha",
    "Music",
    "Romance",
    "Sci-Fi",
    "Slice of Life",
    "Sports",
    "Supernatural",
];

const TYPES: [&str; 6] = ["TV", "Movie", "OVA", "Special", "ONA", "Music"];

const TITLE_WORDS: [&str; 12] = [
    "Crimson", "Eternal", "Silent", "Blade", "Garden", "Star", "Spirit", "Academy", "Drift",
    "Hollow", "Sky", "Requiem",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

fn title(rng: &mut SimpleRng, id: usize) -> String {
    let a = rng.pick(&TITLE_WORDS);
    let b = rng.pick(&TITLE_WORDS);
    // Every 40th title reuses a name; names are not unique in real data.
    if id % 40 == 39 {
        format!("{a} {b}")
    } else {
        format!("{a} {b} {}", id + 1)
    }
}

fn genre_cell(rng: &mut SimpleRng) -> String {
    let n = 1 + rng.below(4);
    let mut tags: Vec<&str> = Vec::with_capacity(n);
    while tags.len() < n {
        let g = rng.pick(&GENRES);
        if !tags.contains(&g) {
            tags.push(g);
        }
    }
    tags.join(", ")
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir).context("creating output directory")?;

    let mut rng = SimpleRng::new(42);
    let n_titles = 400usize;
    let n_users = 150u32;

    // ---- anime.csv ----
    let anime_path = out_dir.join("anime.csv");
    let mut anime = csv::Writer::from_path(&anime_path).context("creating anime.csv")?;
    anime.write_record(["anime_id", "name", "genre", "type", "episodes", "rating", "members"])?;

    for id in 0..n_titles {
        let kind = rng.pick(&TYPES);
        let roll = rng.next_f64();

        // Data-quality noise: missing genre, unknown length, missing rating.
        let genre = if roll < 0.02 { String::new() } else { genre_cell(&mut rng) };
        let episodes = match kind {
            "Movie" | "Music" => "1".to_string(),
            _ if roll > 0.95 => "Unknown".to_string(),
            "TV" => [12, 13, 24, 26, 50, 64, 148, 366][rng.below(8)].to_string(),
            _ => (1 + rng.below(12)).to_string(),
        };
        let rating = if (0.02..0.05).contains(&roll) {
            String::new()
        } else {
            format!("{:.2}", 4.0 + rng.next_f64() * 5.5)
        };
        let members = (rng.next_f64() * 500_000.0) as u64;

        anime.write_record([
            (id + 1).to_string(),
            title(&mut rng, id),
            genre,
            kind.to_string(),
            episodes,
            rating,
            members.to_string(),
        ])?;
    }
    anime.flush()?;

    // ---- rating.csv ----
    let rating_path = out_dir.join("rating.csv");
    let mut ratings = csv::Writer::from_path(&rating_path).context("creating rating.csv")?;
    ratings.write_record(["user_id", "anime_id", "rating"])?;

    let mut n_ratings = 0usize;
    for user in 1..=n_users {
        let watched = 5 + rng.below(30);
        for _ in 0..watched {
            let anime_id = 1 + rng.below(n_titles);
            // -1: watched but not rated
            let score: i64 = if rng.next_f64() < 0.15 { -1 } else { 1 + rng.below(10) as i64 };
            ratings.write_record([user.to_string(), anime_id.to_string(), score.to_string()])?;
            n_ratings += 1;
        }
    }
    ratings.flush()?;

    println!(
        "Wrote {n_titles} titles to {} and {n_ratings} ratings to {}",
        anime_path.display(),
        rating_path.display()
    );
    Ok(())
}
