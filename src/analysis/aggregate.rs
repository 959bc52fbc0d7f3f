//! Single-pass aggregation of dump rows into running counters.
//!
//! All counters are insertion-ordered (`IndexMap`), because downstream
//! ranking breaks count ties by first-seen order. A plain `HashMap` would
//! make tie-breaks nondeterministic.

use crate::analysis::date::{parse_import_date, quarter_key};
use crate::leak::types::LeakRecord;
use chrono::{Datelike, NaiveDateTime};
use indexmap::IndexMap;
use std::collections::HashSet;

/// The five running counters populated by one streaming pass over the dump.
///
/// The "current year" is captured once per run and injected here, so the
/// trailing-year window is stable across the whole pass and tests can pin it.
#[derive(Debug)]
pub struct Aggregates {
    /// Non-empty trimmed identity -> occurrence count
    pub identity_counts: IndexMap<String, usize>,
    /// Quarter key (`YYYY-Qn`) -> rows with a parsed date in that quarter
    pub quarterly_counts: IndexMap<String, usize>,
    /// Non-empty trimmed hash -> total occurrences across the whole file
    pub hash_counts: IndexMap<String, usize>,
    /// Hash -> every identity string ever paired with it (empty included)
    pub hash_identities: IndexMap<String, HashSet<String>>,
    /// Hash -> parsed dates falling in the trailing-year window
    pub recent_hash_dates: IndexMap<String, Vec<NaiveDateTime>>,
    /// Calendar year the run started in; the recent window is `year - 1` onward
    pub current_year: i32,
}

impl Aggregates {
    pub fn new(current_year: i32) -> Self {
        Self {
            identity_counts: IndexMap::new(),
            quarterly_counts: IndexMap::new(),
            hash_counts: IndexMap::new(),
            hash_identities: IndexMap::new(),
            recent_hash_dates: IndexMap::new(),
            current_year,
        }
    }

    /// Folds one row into the counters.
    ///
    /// - identity count: only when the trimmed identity is non-empty
    /// - hash count and hash->identity association: only when the trimmed
    ///   hash is non-empty; the associated identity may be the empty string
    /// - quarterly count: only when the date parsed
    /// - recent dates: only when the hash is non-empty, the date parsed, and
    ///   the date's year is at least `current_year - 1`
    pub fn observe(&mut self, record: &LeakRecord) {
        let identity = record.indicator_of_identity.trim();
        let hash = record.hash.trim();
        let date = parse_import_date(&record.imported_at);

        if !identity.is_empty() {
            *self.identity_counts.entry(identity.to_string()).or_insert(0) += 1;
        }

        if !hash.is_empty() {
            *self.hash_counts.entry(hash.to_string()).or_insert(0) += 1;
            self.hash_identities
                .entry(hash.to_string())
                .or_default()
                .insert(identity.to_string());
        }

        if let Some(date) = date {
            *self.quarterly_counts.entry(quarter_key(&date)).or_insert(0) += 1;

            if !hash.is_empty() && date.year() >= self.current_year - 1 {
                self.recent_hash_dates
                    .entry(hash.to_string())
                    .or_default()
                    .push(date);
            }
        }
    }

    /// Total rows that carried a non-empty identity.
    pub fn identity_row_total(&self) -> usize {
        self.identity_counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(imported_at: &str, identity: &str, hash: &str) -> LeakRecord {
        LeakRecord {
            imported_at: imported_at.to_string(),
            indicator_of_identity: identity.to_string(),
            hash: hash.to_string(),
            source: "test".to_string(),
        }
    }

    #[test]
    fn test_counts_identity_and_hash() {
        let mut agg = Aggregates::new(2024);
        agg.observe(&record("01/15/2024, 10:00:00 AM", "alice", "abc123"));
        agg.observe(&record("01/16/2024, 10:00:00 AM", "alice", "abc123"));
        agg.observe(&record("02/01/2024, 09:00:00", "bob", "xyz987"));

        assert_eq!(agg.identity_counts["alice"], 2);
        assert_eq!(agg.identity_counts["bob"], 1);
        assert_eq!(agg.hash_counts["abc123"], 2);
        assert_eq!(agg.quarterly_counts["2024-Q1"], 3);
        assert_eq!(agg.identity_row_total(), 3);
    }

    #[test]
    fn test_empty_identity_is_not_counted_but_still_associates() {
        let mut agg = Aggregates::new(2024);
        agg.observe(&record("01/15/2024, 10:00:00 AM", "  ", "abc123"));

        assert!(agg.identity_counts.is_empty());
        assert_eq!(agg.hash_counts["abc123"], 1);
        // The empty identity still lands in the association set.
        assert!(agg.hash_identities["abc123"].contains(""));
    }

    #[test]
    fn test_empty_hash_skips_hash_counters() {
        let mut agg = Aggregates::new(2024);
        agg.observe(&record("01/15/2024, 10:00:00 AM", "alice", " "));

        assert_eq!(agg.identity_counts["alice"], 1);
        assert!(agg.hash_counts.is_empty());
        assert!(agg.hash_identities.is_empty());
        assert!(agg.recent_hash_dates.is_empty());
        assert_eq!(agg.quarterly_counts["2024-Q1"], 1);
    }

    #[test]
    fn test_unparseable_date_skips_date_metrics_only() {
        let mut agg = Aggregates::new(2024);
        agg.observe(&record("not-a-date", "alice", "abc123"));

        assert_eq!(agg.identity_counts["alice"], 1);
        assert_eq!(agg.hash_counts["abc123"], 1);
        assert!(agg.quarterly_counts.is_empty());
        assert!(agg.recent_hash_dates.is_empty());
    }

    #[test]
    fn test_recent_window_is_current_year_minus_one() {
        let mut agg = Aggregates::new(2024);
        agg.observe(&record("06/01/2022, 10:00:00", "old", "oldhash"));
        agg.observe(&record("06/01/2023, 10:00:00", "mid", "midhash"));
        agg.observe(&record("06/01/2024, 10:00:00", "new", "newhash"));

        assert!(!agg.recent_hash_dates.contains_key("oldhash"));
        assert_eq!(agg.recent_hash_dates["midhash"].len(), 1);
        assert_eq!(agg.recent_hash_dates["newhash"].len(), 1);
        // The out-of-window row still contributed everywhere else.
        assert_eq!(agg.hash_counts["oldhash"], 1);
        assert_eq!(agg.quarterly_counts["2022-Q2"], 1);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut agg = Aggregates::new(2024);
        agg.observe(&record("01/15/2024, 10:00:00 AM", "zeta", "h1"));
        agg.observe(&record("01/15/2024, 10:00:00 AM", "alpha", "h2"));

        let keys: Vec<&String> = agg.identity_counts.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
