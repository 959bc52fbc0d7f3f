//! Report assembly: the fixed row layout written to the output CSV.

use crate::analysis::aggregate::Aggregates;
use crate::analysis::rank::{recent_hash_counts, sorted_quarters, top_n};
use crate::analysis::similar::find_similar_hashes;
use std::collections::BTreeSet;

/// How many top identities / top recent hashes the report carries.
const TOP_IDENTITIES: usize = 10;
const TOP_RECENT_HASHES: usize = 5;

/// Hash values longer than this are truncated for display.
const HASH_DISPLAY_LEN: usize = 20;

/// One output row.
///
/// `metric` labels carry positional indices, so every label is unique within
/// a single run. The three optional fields are populated only on the
/// top-recent-hash rows and serialize as empty cells elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub metric: String,
    pub value: String,
    pub count: usize,
    pub similar: Option<String>,
    pub similar_count: Option<usize>,
    pub involved: Option<String>,
}

impl ResultRecord {
    fn plain(metric: String, value: String, count: usize) -> Self {
        Self {
            metric,
            value,
            count,
            similar: None,
            similar_count: None,
            involved: None,
        }
    }
}

/// Totals printed in the console summary after the report is written.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportStats {
    /// Rows that carried a non-empty identity
    pub identity_rows: usize,
    /// Distinct identity indicators
    pub distinct_identities: usize,
    /// Distinct hashes counted inside the trailing-year window
    pub recent_hashes: usize,
    /// Distinct quarter buckets
    pub quarters: usize,
}

/// The assembled report.
#[derive(Debug)]
pub struct Report {
    pub records: Vec<ResultRecord>,
    pub stats: ReportStats,
}

/// Builds the report rows in their fixed order: one most-frequent-identity
/// row, up to 10 top identities, one row per quarter (chronological), up to
/// 5 top recent hashes enriched with their similarity cluster.
pub fn build_report(agg: &Aggregates) -> Report {
    let mut records = Vec::new();

    if let Some((identity, count)) = top_n(&agg.identity_counts, 1).into_iter().next() {
        records.push(ResultRecord::plain(
            "Indicator of Identity più frequente".to_string(),
            identity,
            count,
        ));
    }

    for (i, (identity, count)) in top_n(&agg.identity_counts, TOP_IDENTITIES)
        .into_iter()
        .enumerate()
    {
        records.push(ResultRecord::plain(
            format!("Top {} Indicator of Identity", i + 1),
            identity,
            count,
        ));
    }

    for (quarter_key, count) in sorted_quarters(&agg.quarterly_counts) {
        records.push(ResultRecord::plain(
            format!("Occorrenze totali {quarter_key}"),
            quarter_key,
            count,
        ));
    }

    let recent = recent_hash_counts(agg);
    let top_hashes = top_n(&recent, TOP_RECENT_HASHES);
    let hash_keys: Vec<String> = top_hashes.iter().map(|(hash, _)| hash.clone()).collect();
    let similar_by_hash = find_similar_hashes(&hash_keys, &agg.hash_counts);

    for (i, (hash, count)) in top_hashes.into_iter().enumerate() {
        let similars = &similar_by_hash[&hash];

        let similar_list = if similars.is_empty() {
            "-".to_string()
        } else {
            similars.keys().cloned().collect::<Vec<_>>().join(", ")
        };
        let similar_count: usize = similars.values().sum();

        // Identities tied to the whole cluster: the top hash plus every
        // matched candidate, deduplicated and sorted.
        let mut involved: BTreeSet<String> = BTreeSet::new();
        for member in std::iter::once(&hash).chain(similars.keys()) {
            if let Some(identities) = agg.hash_identities.get(member) {
                involved.extend(identities.iter().cloned());
            }
        }
        let involved_list = if involved.is_empty() {
            "-".to_string()
        } else {
            involved.into_iter().collect::<Vec<_>>().join(", ")
        };

        records.push(ResultRecord {
            metric: format!("Top {} Hash ultimo anno", i + 1),
            value: display_hash(&hash),
            count,
            similar: Some(similar_list),
            similar_count: Some(similar_count),
            involved: Some(involved_list),
        });
    }

    let stats = ReportStats {
        identity_rows: agg.identity_row_total(),
        distinct_identities: agg.identity_counts.len(),
        recent_hashes: recent.len(),
        quarters: agg.quarterly_counts.len(),
    };

    Report { records, stats }
}

/// Truncates a hash to 20 characters plus an ellipsis for display.
fn display_hash(hash: &str) -> String {
    if hash.chars().count() > HASH_DISPLAY_LEN {
        let truncated: String = hash.chars().take(HASH_DISPLAY_LEN).collect();
        format!("{truncated}...")
    } else {
        hash.to_string()
    }
}
