//! Error types for prosestat-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the analyzer state machine.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The committed character limit is empty, non-numeric, or not positive.
    #[error("invalid character limit: {input:?} (expected a positive integer)")]
    InvalidLimit {
        /// The raw value that failed to parse.
        input: String,
    },
}

/// Result type alias using [`AnalyzerError`].
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Errors that can occur when reading or writing the theme preference.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The preference file could not be written.
    #[error("failed to persist theme to {path}")]
    Write {
        /// Path of the preference file.
        path: camino::Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// No platform data directory could be determined.
    #[error("no data directory available for theme storage")]
    NoDataDir,
}

/// Result type alias using [`ThemeError`].
pub type ThemeResult<T> = Result<T, ThemeError>;
