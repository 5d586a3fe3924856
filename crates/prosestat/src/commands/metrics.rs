//! Metrics command — character, word, and sentence counts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosestat_core::metrics;

use super::read_input_file;

/// Arguments for the `metrics` subcommand.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Exclude whitespace from the character count.
    #[arg(long)]
    pub exclude_spaces: bool,
}

/// Compute text metrics for a file.
#[instrument(name = "cmd_metrics", skip_all, fields(file = %args.file))]
pub fn cmd_metrics(
    args: MetricsArgs,
    global_json: bool,
    config_exclude_spaces: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, exclude_spaces = args.exclude_spaces, "executing metrics command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let exclude_spaces = args.exclude_spaces || config_exclude_spaces;
    let report = metrics::compute_metrics(&content, exclude_spaces);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "  {} {}{}",
        "Characters:".cyan(),
        report.total_characters,
        if exclude_spaces { " (no spaces)" } else { "" },
    );
    println!("  {} {}", "Words:".cyan(), report.word_count);
    println!("  {} {}", "Sentences:".cyan(), report.sentence_count);
    // 0 means the estimate rounded down; the numeric value stays in JSON output
    if report.reading_time_minutes == 0 {
        println!("  {} under 1 minute", "Reading time:".cyan());
    } else {
        println!(
            "  {} {} min",
            "Reading time:".cyan(),
            report.reading_time_minutes
        );
    }

    Ok(())
}
