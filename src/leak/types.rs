//! Data structures representing rows of a leaked-credential dump.
//!
//! These types mirror the CSV column layout of the dumps this tool consumes,
//! enabling direct deserialization with serde. Column order in the file is
//! irrelevant and extra columns are ignored; only the four required columns
//! are read.

use serde::Deserialize;
use thiserror::Error;

/// The columns every input dump must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["imported_at", "indicator_of_identity", "hash", "source"];

/// One row of a leaked-credential dump.
///
/// Rows are consumed one at a time during aggregation and never retained as a
/// collection. All fields arrive as raw strings; trimming and date parsing
/// happen in the analysis layer.
#[derive(Debug, Clone, Deserialize)]
pub struct LeakRecord {
    /// Raw import timestamp, e.g. `01/15/2024, 10:00:00 AM`
    pub imported_at: String,
    /// Identity indicator (email, username, ...); may be empty
    pub indicator_of_identity: String,
    /// Credential hash; may be empty
    pub hash: String,
    /// Source label of the leak; not used by the analysis
    pub source: String,
}

/// Raised when the input dump is missing one or more required columns.
///
/// Carries the headers actually found so the report to the user can show
/// what the file really looked like.
#[derive(Debug, Error)]
#[error("missing required column(s) {missing:?}; headers found: {found:?}")]
pub struct MissingColumns {
    pub missing: Vec<String>,
    pub found: Vec<String>,
}

/// Checks that every required column is present in the header row.
///
/// Header names are compared after trimming surrounding whitespace.
pub fn validate_headers(headers: &csv::StringRecord) -> Result<(), MissingColumns> {
    let found: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !found.iter().any(|h| h == *required))
        .map(|required| (*required).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingColumns { missing, found })
    }
}
