//! Logging and tracing initialization.
//!
//! Human-readable logs go to stderr, filtered by `RUST_LOG` or the
//! quiet/verbose flags. When a log path or directory is configured
//! (config file or `PROSESTAT_LOG_PATH`/`PROSESTAT_LOG_DIR` env vars),
//! a JSONL file layer is added via a non-blocking appender; the returned
//! guard must stay alive for the duration of the process so buffered
//! events are flushed on exit.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// File name used when only a log directory is configured.
const LOG_FILE_NAME: &str = "prosestat.jsonl";

/// Where file logs should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (wins over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory to place the default log file in.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's log
    /// directory as a fallback.
    ///
    /// Precedence: `PROSESTAT_LOG_PATH` > `PROSESTAT_LOG_DIR` > `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("PROSESTAT_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("PROSESTAT_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Resolve the log file path, if file logging is configured at all.
    fn resolved_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

/// Build the env filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `-q` forces `error`, each `-v`
/// steps the level up (info → debug → trace), and the config file's
/// level is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global subscriber.
///
/// Returns the appender guard when file logging is active; hold it until
/// process exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(path) = config.resolved_path() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to set global subscriber: {e}"))?;
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .boxed();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global subscriber: {e}"))?;

    Ok(Some(guard))
}
