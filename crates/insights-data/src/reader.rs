//! File loading for CSV exports and attached insights.

use std::path::Path;

use insights_core::error::{InsightsError, Result};
use insights_core::models::{Insights, TransactionRecord};
use tracing::{debug, warn};

use crate::parser::parse_with_stats;

/// Read a CSV export from disk and parse it into records.
///
/// An unreadable file is an error; a file with no usable rows is not and
/// yields an empty vector.
pub fn load_records(path: &Path) -> Result<Vec<TransactionRecord>> {
    let text = read_text(path)?;
    let (records, stats) = parse_with_stats(&text);

    if records.is_empty() {
        warn!("No valid rows found in {}", path.display());
    } else if stats.rows_dropped > 0 {
        warn!(
            "Dropped {} of {} rows in {} (too few columns)",
            stats.rows_dropped,
            stats.rows_seen,
            path.display()
        );
    }

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read a JSON document of recommendations / forecast.
pub fn load_insights(path: &Path) -> Result<Insights> {
    let text = read_text(path)?;
    let insights: Insights = serde_json::from_str(&text)?;
    debug!(
        "Loaded {} recommendations from {}",
        insights.recommendations.len(),
        path.display()
    );
    Ok(insights)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| InsightsError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
