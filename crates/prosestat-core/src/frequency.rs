//! Character frequency ranking.
//!
//! Counts case-folded characters in a single pass and produces a
//! descending ranking with percentage shares. The total deliberately
//! includes every character — whitespace and punctuation too — so the
//! percentages describe the whole input, not just letters. Do not filter
//! to alphabetic characters here; downstream display decides what to show.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One ranked character with its count and share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyEntry {
    /// The case-folded character.
    pub character: char,
    /// Number of occurrences (always ≥ 1).
    pub count: usize,
    /// Share of all counted characters, rounded to 2 decimals.
    ///
    /// Entries are rounded independently, so the column sums to
    /// approximately — not exactly — 100.
    pub percentage: f64,
}

/// Rank every distinct case-folded character in `text` by count, descending.
///
/// Ties keep first-occurrence order: counting preserves insertion order
/// and the sort is stable, so equal-count characters appear in the order
/// they first showed up in the source text.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn rank(text: &str) -> Vec<FrequencyEntry> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut order: Vec<char> = Vec::new();
    let mut total = 0usize;

    for ch in text.chars() {
        for folded in ch.to_lowercase() {
            total += 1;
            match counts.entry(folded) {
                std::collections::hash_map::Entry::Occupied(mut e) => *e.get_mut() += 1,
                std::collections::hash_map::Entry::Vacant(e) => {
                    e.insert(1);
                    order.push(folded);
                }
            }
        }
    }

    let mut entries: Vec<FrequencyEntry> = order
        .into_iter()
        .map(|character| {
            let count = counts[&character];
            FrequencyEntry {
                character,
                count,
                percentage: round2(count as f64 / total as f64 * 100.0),
            }
        })
        .collect();

    // Stable: equal counts retain insertion order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// The first `window_size` entries of a ranking (fewer if it is shorter).
pub fn top_window(ranking: &[FrequencyEntry], window_size: usize) -> &[FrequencyEntry] {
    &ranking[..window_size.min(ranking.len())]
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
