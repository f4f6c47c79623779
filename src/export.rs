use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::data::AnimeRecord;

/// Save recommendations to a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header `name,genre,type,episodes,rating`, unknown episodes left blank
/// * `.json` – pretty-printed array of objects with the same keys
pub fn write_results(path: &Path, records: &[AnimeRecord]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, records),
        "json" => write_json(path, records),
        other => bail!("Unsupported export extension: .{other}"),
    }?;

    log::info!("Exported {} titles to {}", records.len(), path.display());
    Ok(())
}

fn write_csv(path: &Path, records: &[AnimeRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for rec in records {
        writer.serialize(rec).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_json(path: &Path, records: &[AnimeRecord]) -> Result<()> {
    let text = serde_json::to_string_pretty(records).context("encoding JSON")?;
    std::fs::write(path, text).context("writing JSON file")?;
    Ok(())
}
