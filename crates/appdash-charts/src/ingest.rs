//! CSV ingestion for the listings dataset.

use appdash_common::{AppDashError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// One raw CSV row, fields still string-typed. Columns beyond the known
/// set are ignored by the reader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Rating", default)]
    pub rating: String,
    #[serde(rename = "Reviews", default)]
    pub reviews: String,
    #[serde(rename = "Installs", default)]
    pub installs: String,
    #[serde(rename = "Size", default)]
    pub size: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Price", default)]
    pub price: String,
    #[serde(rename = "Last Updated", default)]
    pub last_updated: String,
}

/// Reads the raw listing rows from `path`.
///
/// An absent or unreadable file is the single fatal condition of the whole
/// run. Individual records that fail to decode are skipped with a warning.
pub fn read_listings(path: &Path) -> Result<Vec<RawListing>> {
    if !path.is_file() {
        return Err(AppDashError::ingest(format!(
            "input file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|err| {
        AppDashError::ingest_with_source(format!("cannot open {}", path.display()), err)
    })?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (index, result) in reader.deserialize::<RawListing>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) => {
                // Header line is 1, so the first record sits on line 2.
                warn!("Skipping undecodable record on line {}: {}", index + 2, err);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("{} records could not be decoded and were dropped", skipped);
    }
    info!("Loaded {} listing rows from {}", rows.len(), path.display());
    Ok(rows)
}
