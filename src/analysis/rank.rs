//! Deterministic ranking over the aggregated counters.

use crate::analysis::aggregate::Aggregates;
use chrono::Datelike;
use indexmap::IndexMap;

/// Top `n` entries by count, descending.
///
/// The sort is stable over an insertion-ordered counter, so ties resolve to
/// whichever key was seen first in the input.
pub fn top_n(counts: &IndexMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> =
        counts.iter().map(|(key, &count)| (key.clone(), count)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// All quarter buckets in ascending key order.
///
/// `YYYY-Qn` keys sort chronologically under plain lexical comparison.
pub fn sorted_quarters(counts: &IndexMap<String, usize>) -> Vec<(String, usize)> {
    let mut quarters: Vec<(String, usize)> =
        counts.iter().map(|(key, &count)| (key.clone(), count)).collect();
    quarters.sort_by(|a, b| a.0.cmp(&b.0));
    quarters
}

/// Per-hash counts of dated entries within the trailing-year window.
///
/// The year filter is applied again here even though `recent_hash_dates` was
/// populated under the same predicate; dropping the re-check would silently
/// change the report if the population rule ever moves. Hashes whose
/// re-filtered count is zero are excluded.
pub fn recent_hash_counts(agg: &Aggregates) -> IndexMap<String, usize> {
    let cutoff = agg.current_year - 1;
    let mut counts = IndexMap::new();
    for (hash, dates) in &agg.recent_hash_dates {
        let recent = dates.iter().filter(|d| d.year() >= cutoff).count();
        if recent > 0 {
            counts.insert(hash.clone(), recent);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leak::types::LeakRecord;

    fn counter(pairs: &[(&str, usize)]) -> IndexMap<String, usize> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_top_n_orders_by_count_descending() {
        let counts = counter(&[("a", 1), ("b", 5), ("c", 3)]);
        let top = top_n(&counts, 10);
        assert_eq!(
            top,
            vec![
                ("b".to_string(), 5),
                ("c".to_string(), 3),
                ("a".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_top_n_ties_break_by_first_seen() {
        let counts = counter(&[("later", 2), ("zed", 7), ("earlier", 7)]);
        let top = top_n(&counts, 2);
        // "zed" was inserted before "earlier"; stable sort keeps it first.
        assert_eq!(top[0].0, "zed");
        assert_eq!(top[1].0, "earlier");
    }

    #[test]
    fn test_top_n_truncates() {
        let counts = counter(&[("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(top_n(&counts, 2).len(), 2);
        assert_eq!(top_n(&counts, 0).len(), 0);
        // Fewer distinct keys than n is fine.
        assert_eq!(top_n(&counts, 10).len(), 3);
    }

    #[test]
    fn test_sorted_quarters_is_chronological() {
        let counts = counter(&[("2024-Q3", 1), ("2023-Q4", 2), ("2024-Q1", 3)]);
        let quarters = sorted_quarters(&counts);
        let keys: Vec<&str> = quarters.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["2023-Q4", "2024-Q1", "2024-Q3"]);
    }

    #[test]
    fn test_recent_hash_counts_refilters_by_year() {
        let mut agg = crate::analysis::aggregate::Aggregates::new(2024);
        let rows = [
            ("01/15/2024, 10:00:00 AM", "alice", "abc123"),
            ("03/10/2024, 10:00:00 AM", "alice", "abc123"),
            ("05/01/2023, 09:00:00", "bob", "xyz987"),
        ];
        for (imported_at, identity, hash) in rows {
            agg.observe(&LeakRecord {
                imported_at: imported_at.to_string(),
                indicator_of_identity: identity.to_string(),
                hash: hash.to_string(),
                source: String::new(),
            });
        }

        let recent = recent_hash_counts(&agg);
        assert_eq!(recent["abc123"], 2);
        assert_eq!(recent["xyz987"], 1);
        // Insertion order follows the first qualifying row per hash.
        let keys: Vec<&String> = recent.keys().collect();
        assert_eq!(keys, vec!["abc123", "xyz987"]);
    }
}
