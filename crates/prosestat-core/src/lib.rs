//! Core library for prosestat.
//!
//! This crate provides the text statistics engine used by the `prosestat`
//! CLI and any downstream consumers: pure metric computation, letter
//! frequency ranking, and the analyzer state machine that ties them
//! together for a live-updating front end.
//!
//! # Modules
//!
//! - [`metrics`] - Character/word/sentence counts and reading time
//! - [`frequency`] - Case-folded character frequency ranking
//! - [`analyzer`] - Stateful controller composing metrics and frequency
//! - [`theme`] - Persisted light/dark theme preference
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use prosestat_core::analyzer::Analyzer;
//!
//! let mut analyzer = Analyzer::new(false, None, 5);
//! analyzer.on_text_changed("Hello world. How are you?");
//! let snapshot = analyzer.snapshot();
//! assert_eq!(snapshot.metrics.word_count, 5);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod frequency;
pub mod metrics;
pub mod theme;

pub use analyzer::{AnalysisSnapshot, Analyzer};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{AnalyzerError, AnalyzerResult, ConfigError, ConfigResult, ThemeError, ThemeResult};
pub use frequency::{FrequencyEntry, rank, top_window};
pub use metrics::{MetricsReport, compute_metrics};
pub use theme::{Theme, ThemeStore};

/// Default maximum input size in bytes (5 MiB).
///
/// Guards the CLI against reading oversized inputs into memory; see
/// [`Config`](config::Config) for overrides.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Minimum (and initial) size of the frequency display window.
pub const MIN_WINDOW_SIZE: usize = 5;

/// Step by which the display window expands or collapses.
pub const WINDOW_STEP: usize = 5;
