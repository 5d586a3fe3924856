//! Text metrics: character, word, and sentence counts plus reading time.
//!
//! All functions here are total over arbitrary input strings — empty or
//! whitespace-only text produces zero-valued results, never an error.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Characters read per minute, used for the reading time estimate.
const CHARS_PER_MINUTE: usize = 1000;

/// Regex for runs of sentence-terminating punctuation.
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Result of metric computation over a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MetricsReport {
    /// Character count, with whitespace excluded when requested.
    pub total_characters: usize,
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Number of sentences (non-empty segments between terminators).
    pub sentence_count: usize,
    /// Estimated reading time in whole minutes (0 = under one minute).
    ///
    /// Callers render 0 as "under one minute"; the value itself stays numeric.
    pub reading_time_minutes: u64,
}

/// Compute all metrics for `text`.
///
/// # Arguments
///
/// * `text` — The text to measure.
/// * `exclude_spaces` — If `true`, whitespace does not count toward
///   `total_characters`. Reading time always uses the raw length.
#[tracing::instrument(skip_all, fields(text_len = text.len(), exclude_spaces))]
pub fn compute_metrics(text: &str, exclude_spaces: bool) -> MetricsReport {
    MetricsReport {
        total_characters: total_characters(text, exclude_spaces),
        word_count: count_words(text),
        sentence_count: count_sentences(text),
        reading_time_minutes: reading_time_minutes(text),
    }
}

/// Count characters, optionally skipping all whitespace.
pub fn total_characters(text: &str, exclude_spaces: bool) -> usize {
    if exclude_spaces {
        text.chars().filter(|c| !c.is_whitespace()).count()
    } else {
        text.chars().count()
    }
}

/// Count maximal non-whitespace runs.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences by splitting on runs of `.`, `!`, `?`.
///
/// A segment counts only if its trimmed form is non-empty, so trailing
/// terminators and bare punctuation ("...") contribute nothing.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_TERMINATORS
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Estimated reading time in whole minutes, rounded half-up.
///
/// Based on the raw character count regardless of the exclude-spaces
/// setting, at [`CHARS_PER_MINUTE`] characters per minute.
pub fn reading_time_minutes(text: &str) -> u64 {
    let chars = text.chars().count();
    ((chars + CHARS_PER_MINUTE / 2) / CHARS_PER_MINUTE) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zeroes() {
        let report = compute_metrics("", false);
        assert_eq!(report.total_characters, 0);
        assert_eq!(report.word_count, 0);
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.reading_time_minutes, 0);

        let report = compute_metrics("", true);
        assert_eq!(report.total_characters, 0);
    }

    #[test]
    fn raw_character_count_matches_length() {
        let text = "Hello, world!";
        assert_eq!(
            compute_metrics(text, false).total_characters,
            text.chars().count()
        );
    }

    #[test]
    fn exclude_spaces_drops_all_whitespace() {
        let report = compute_metrics("a b\tc\nd", true);
        assert_eq!(report.total_characters, 4);
    }

    #[test]
    fn multibyte_characters_count_once() {
        // char count, not byte count
        assert_eq!(compute_metrics("héllo", false).total_characters, 5);
    }

    #[test]
    fn word_count_ignores_surrounding_whitespace() {
        assert_eq!(compute_metrics("one two three", false).word_count, 3);
        assert_eq!(compute_metrics("   one two three \n ", false).word_count, 3);
    }

    #[test]
    fn whitespace_only_has_no_words() {
        assert_eq!(compute_metrics(" \t\n ", false).word_count, 0);
    }

    #[test]
    fn sentence_count_splits_on_terminators() {
        assert_eq!(compute_metrics("Hello. World!", false).sentence_count, 2);
        assert_eq!(
            compute_metrics("One. Two! Three? Four", false).sentence_count,
            4
        );
    }

    #[test]
    fn bare_punctuation_counts_no_sentences() {
        assert_eq!(compute_metrics("...", false).sentence_count, 0);
        assert_eq!(compute_metrics("?!?!", false).sentence_count, 0);
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        assert_eq!(compute_metrics("No terminator", false).sentence_count, 1);
    }

    #[test]
    fn terminator_runs_collapse() {
        // "Wait... what?!" is two segments, not four
        assert_eq!(compute_metrics("Wait... what?!", false).sentence_count, 2);
    }

    #[test]
    fn reading_time_exact_thousand() {
        let text = "x".repeat(1000);
        assert_eq!(compute_metrics(&text, false).reading_time_minutes, 1);
    }

    #[test]
    fn reading_time_rounds_down_under_half() {
        let text = "x".repeat(400);
        assert_eq!(compute_metrics(&text, false).reading_time_minutes, 0);
    }

    #[test]
    fn reading_time_rounds_half_up() {
        let text = "x".repeat(500);
        assert_eq!(compute_metrics(&text, false).reading_time_minutes, 1);
        let text = "x".repeat(1499);
        assert_eq!(compute_metrics(&text, false).reading_time_minutes, 1);
        let text = "x".repeat(1500);
        assert_eq!(compute_metrics(&text, false).reading_time_minutes, 2);
    }

    #[test]
    fn reading_time_uses_raw_length_even_when_excluding_spaces() {
        // 999 chars raw: 499 x's, a space, 499 x's
        let text = format!("{} {}", "x".repeat(499), "x".repeat(499));
        assert_eq!(text.chars().count(), 999);
        let report = compute_metrics(&text, true);
        assert_eq!(report.total_characters, 998);
        assert_eq!(report.reading_time_minutes, 1);
    }
}
