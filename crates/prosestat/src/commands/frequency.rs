//! Frequency command — ranked character counts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosestat_core::{MIN_WINDOW_SIZE, frequency};

use super::read_input_file;

/// Arguments for the `frequency` subcommand.
#[derive(Args, Debug)]
pub struct FrequencyArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Number of top entries to show (floor of 5).
    #[arg(long, conflicts_with = "all")]
    pub top: Option<usize>,

    /// Show the full ranking.
    #[arg(long)]
    pub all: bool,
}

/// Rank characters in a file by frequency.
#[instrument(name = "cmd_frequency", skip_all, fields(file = %args.file))]
pub fn cmd_frequency(
    args: FrequencyArgs,
    global_json: bool,
    config_window_size: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, top = ?args.top, all = args.all, "executing frequency command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let ranking = frequency::rank(&content);
    let window = if args.all {
        ranking.len()
    } else {
        args.top
            .unwrap_or(config_window_size)
            .max(MIN_WINDOW_SIZE)
    };
    let visible = frequency::top_window(&ranking, window);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    if ranking.is_empty() {
        println!("  (empty input)");
        return Ok(());
    }

    for entry in visible {
        println!(
            "  {} {:>6} ({:>5.2}%)",
            display_char(entry.character).cyan(),
            entry.count,
            entry.percentage,
        );
    }
    if ranking.len() > visible.len() {
        println!(
            "  {} {} more",
            "…".dimmed(),
            ranking.len() - visible.len()
        );
    }

    Ok(())
}

/// Printable label for a ranked character.
fn display_char(ch: char) -> String {
    match ch {
        ' ' => "␣".to_string(),
        '\t' => "\\t".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        other => other.to_string(),
    }
}
