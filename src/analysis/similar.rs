//! Approximate hash-similarity clustering.
//!
//! Two hashes are "similar" when they share at least one 4-character
//! contiguous substring, compared case-insensitively. This is a deliberately
//! crude O(top_n x all_hashes x hash_length) heuristic, not an edit-distance
//! or n-gram score; downstream consumers depend on today's exact clustering
//! shape, so the short-circuit and windowing behavior below must not be
//! "improved".

use indexmap::IndexMap;

/// For each top hash, every other hash sharing a 4-character window with it,
/// mapped to that candidate's global occurrence count.
///
/// Candidates come from the full hash universe (`hash_counts` key set, in
/// insertion order). The scan over a candidate's windows stops at the first
/// match. A candidate shorter than 4 characters contributes no windows and
/// can never match. Equality against the top hash is exact-value on original
/// casing, so two hashes differing only in case can match each other.
pub fn find_similar_hashes(
    top_hashes: &[String],
    hash_counts: &IndexMap<String, usize>,
) -> IndexMap<String, IndexMap<String, usize>> {
    let mut similar_by_hash = IndexMap::new();

    for top_hash in top_hashes {
        let top_lower = top_hash.to_lowercase();
        let mut similar: IndexMap<String, usize> = IndexMap::new();

        for (candidate, &count) in hash_counts {
            if candidate == top_hash {
                continue;
            }
            let candidate_chars: Vec<char> = candidate.to_lowercase().chars().collect();
            for window in candidate_chars.windows(4) {
                let needle: String = window.iter().collect();
                if top_lower.contains(&needle) {
                    similar.insert(candidate.clone(), count);
                    break;
                }
            }
        }

        similar_by_hash.insert(top_hash.clone(), similar);
    }

    similar_by_hash
}
