//! Theme command — show or persist the light/dark preference.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use prosestat_core::{Theme, ThemeStore};

/// Arguments for the `theme` subcommand.
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Theme to persist. Omit to show the current preference.
    #[arg(value_enum)]
    pub theme: Option<Theme>,

    /// Flip the persisted preference instead of setting one.
    #[arg(long, conflicts_with = "theme")]
    pub toggle: bool,
}

#[derive(Serialize)]
struct ThemeInfo {
    theme: &'static str,
    persisted: bool,
    store: String,
}

/// Show, set, or toggle the persisted theme preference.
#[instrument(name = "cmd_theme", skip_all)]
pub fn cmd_theme(
    args: ThemeArgs,
    global_json: bool,
    config_default: Option<Theme>,
) -> anyhow::Result<()> {
    debug!(theme = ?args.theme, toggle = args.toggle, "executing theme command");

    let store = ThemeStore::new()?;

    // Read once; fall back to the config default, then Light.
    let current = store.load();
    let effective = current.or(config_default).unwrap_or_default();

    let (theme, persisted) = if let Some(theme) = args.theme {
        store.save(theme)?;
        (theme, true)
    } else if args.toggle {
        let next = effective.toggled();
        store.save(next)?;
        (next, true)
    } else {
        (effective, current.is_some())
    };

    if global_json {
        let info = ThemeInfo {
            theme: theme.as_str(),
            persisted,
            store: store.path().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    if persisted {
        println!("{}", theme);
    } else {
        println!("{} {}", theme, "(default, not persisted)".dimmed());
    }

    Ok(())
}
