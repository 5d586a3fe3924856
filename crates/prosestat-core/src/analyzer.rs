//! Analyzer controller: configuration state plus event transitions.
//!
//! The [`Analyzer`] owns the exclude-spaces flag, the optional character
//! limit, and the display window size. A thin adapter layer (the CLI
//! here, any event-driven front end in general) forwards input events to
//! the transition methods and renders the [`AnalysisSnapshot`] they
//! leave behind. Every transition is synchronous and runs to completion;
//! there is no shared state beyond the controller itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::frequency::{self, FrequencyEntry};
use crate::metrics::{self, MetricsReport};
use crate::{MIN_WINDOW_SIZE, WINDOW_STEP};

/// Presentation state for the external renderer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisSnapshot {
    /// Current metric values.
    pub metrics: MetricsReport,
    /// Whether the character count exceeds the configured limit.
    pub over_limit: bool,
    /// The configured character limit, for error rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_limit: Option<usize>,
    /// Whether the last committed limit value was invalid.
    pub limit_field_error: bool,
    /// The ranked entries visible in the current display window.
    pub entries: Vec<FrequencyEntry>,
    /// Total number of distinct ranked characters.
    pub ranking_len: usize,
    /// Current display window size.
    pub window_size: usize,
    /// Whether a "show more" control applies (ranking extends past the window).
    pub show_more: bool,
    /// Whether a "show less" control applies (window grew past the floor).
    pub show_less: bool,
}

/// Stateful controller composing [`metrics`] and [`frequency`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    text: String,
    exclude_spaces: bool,
    char_limit: Option<usize>,
    window_size: usize,
    metrics: MetricsReport,
    ranking: Vec<FrequencyEntry>,
    over_limit: bool,
    limit_field_error: bool,
}

impl Analyzer {
    /// Create a controller with the given configuration.
    ///
    /// `window_size` is clamped to the floor of [`MIN_WINDOW_SIZE`].
    pub fn new(exclude_spaces: bool, char_limit: Option<usize>, window_size: usize) -> Self {
        Self {
            text: String::new(),
            exclude_spaces,
            char_limit,
            window_size: window_size.max(MIN_WINDOW_SIZE),
            metrics: metrics::compute_metrics("", exclude_spaces),
            ranking: Vec::new(),
            over_limit: false,
            limit_field_error: false,
        }
    }

    /// React to a text change: recompute metrics and, unless the new text
    /// is over the character limit, refresh the frequency ranking.
    ///
    /// While over the limit the previous ranking stays in place — the
    /// letter list is not updated until the text validates again.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn on_text_changed(&mut self, text: &str) {
        self.text = text.to_string();
        self.metrics = metrics::compute_metrics(&self.text, self.exclude_spaces);
        self.over_limit = self.exceeds_limit();

        if self.over_limit {
            debug!(
                total = self.metrics.total_characters,
                limit = ?self.char_limit,
                "over limit, skipping ranking update"
            );
            return;
        }

        self.ranking = frequency::rank(&self.text);
    }

    /// Toggle whitespace exclusion.
    ///
    /// Cheap path: only the character count is recomputed (the word and
    /// sentence counts and the ranking do not depend on this flag), then
    /// the limit is re-validated against the new count.
    pub fn set_exclude_spaces(&mut self, exclude_spaces: bool) {
        self.exclude_spaces = exclude_spaces;
        self.metrics.total_characters = metrics::total_characters(&self.text, exclude_spaces);
        self.over_limit = self.exceeds_limit();
    }

    /// Enable or disable the character limit feature.
    ///
    /// Disabling clears the limit and any over-limit state. Enabling
    /// leaves the limit unset until a value is committed via
    /// [`commit_char_limit`](Self::commit_char_limit).
    pub fn set_char_limit_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.char_limit = None;
            self.over_limit = false;
            self.limit_field_error = false;
        }
    }

    /// Commit a raw character-limit value from the input field.
    ///
    /// Empty, non-numeric, and non-positive values fail with
    /// [`AnalyzerError::InvalidLimit`]: the limit is cleared, the
    /// field-error flag is set, and nothing else happens. A valid value
    /// is applied and the current text is re-validated immediately.
    #[tracing::instrument(skip_all, fields(raw = %raw))]
    pub fn commit_char_limit(&mut self, raw: &str) -> AnalyzerResult<()> {
        let parsed = raw.trim().parse::<usize>().ok().filter(|&limit| limit > 0);

        let Some(limit) = parsed else {
            self.char_limit = None;
            self.limit_field_error = true;
            return Err(AnalyzerError::InvalidLimit {
                input: raw.to_string(),
            });
        };

        self.char_limit = Some(limit);
        self.limit_field_error = false;
        let text = std::mem::take(&mut self.text);
        self.on_text_changed(&text);
        Ok(())
    }

    /// Grow the display window by one step.
    pub fn expand_window(&mut self) {
        self.window_size += WINDOW_STEP;
    }

    /// Shrink the display window by one step, never below the floor.
    pub fn collapse_window(&mut self) {
        self.window_size = self.window_size.saturating_sub(WINDOW_STEP).max(MIN_WINDOW_SIZE);
    }

    /// Current metric values.
    pub const fn metrics(&self) -> &MetricsReport {
        &self.metrics
    }

    /// Whether the character count exceeds the configured limit.
    pub const fn over_limit(&self) -> bool {
        self.over_limit
    }

    /// The configured character limit, if any.
    pub const fn char_limit(&self) -> Option<usize> {
        self.char_limit
    }

    /// Current display window size.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// The ranked entries visible in the current window.
    pub fn visible_entries(&self) -> &[FrequencyEntry] {
        frequency::top_window(&self.ranking, self.window_size)
    }

    /// Build the presentation state for the renderer.
    pub fn snapshot(&self) -> AnalysisSnapshot {
        AnalysisSnapshot {
            metrics: self.metrics.clone(),
            over_limit: self.over_limit,
            char_limit: self.char_limit,
            limit_field_error: self.limit_field_error,
            entries: self.visible_entries().to_vec(),
            ranking_len: self.ranking.len(),
            window_size: self.window_size,
            show_more: self.ranking.len() > self.window_size,
            show_less: self.window_size > MIN_WINDOW_SIZE,
        }
    }

    fn exceeds_limit(&self) -> bool {
        self.char_limit
            .is_some_and(|limit| self.metrics.total_characters > limit)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(false, None, MIN_WINDOW_SIZE)
    }
}
