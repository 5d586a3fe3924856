//! Analyze command — the full analyzer pass over a file.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosestat_core::{Analyzer, Config};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Exclude whitespace from the character count.
    #[arg(long)]
    pub exclude_spaces: bool,

    /// Character limit; the command fails when the count exceeds it.
    #[arg(long)]
    pub char_limit: Option<usize>,

    /// Frequency display window size (floor of 5).
    #[arg(long)]
    pub window: Option<usize>,
}

/// Run the analyzer over a file and render the resulting snapshot.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, char_limit = ?args.char_limit, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let exclude_spaces = args.exclude_spaces || config.exclude_spaces;
    let char_limit = args.char_limit.or(config.char_limit);
    let window = args.window.unwrap_or(config.window_size);

    let mut analyzer = Analyzer::new(exclude_spaces, char_limit, window);
    analyzer.on_text_changed(&content);
    let snapshot = analyzer.snapshot();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "  {} {} characters, {} words, {} sentences",
        "Metrics:".cyan(),
        snapshot.metrics.total_characters,
        snapshot.metrics.word_count,
        snapshot.metrics.sentence_count,
    );
    if snapshot.metrics.reading_time_minutes == 0 {
        println!("  {} under 1 minute", "Reading time:".cyan());
    } else {
        println!(
            "  {} {} min",
            "Reading time:".cyan(),
            snapshot.metrics.reading_time_minutes
        );
    }

    if !snapshot.entries.is_empty() {
        println!("  {}", "Top characters:".cyan());
        for entry in &snapshot.entries {
            println!(
                "    {} {:>6} ({:>5.2}%)",
                entry.character,
                entry.count,
                entry.percentage,
            );
        }
        if snapshot.show_more {
            println!(
                "    {} {} more",
                "…".dimmed(),
                snapshot.ranking_len - snapshot.entries.len()
            );
        }
    }

    if snapshot.over_limit {
        let limit = snapshot.char_limit.unwrap_or(0);
        bail!(
            "{} is {} characters (limit: {})",
            args.file,
            snapshot.metrics.total_characters.red(),
            limit,
        );
    }

    Ok(())
}
