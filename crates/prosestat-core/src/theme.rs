//! Persisted light/dark theme preference.
//!
//! The preference is a single string value ("light" or "dark") stored in
//! a well-known file under the platform data directory. It is read once
//! at startup and written on each toggle; last write wins.

use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};

/// Application name for platform directory lookup.
const APP_NAME: &str = "prosestat";

/// File name the preference is stored under.
const THEME_FILE: &str = "theme";

/// Visual theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Theme {
    /// Light background, dark text (default).
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// Returns the theme as its persisted string value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// File-backed store for the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: Utf8PathBuf,
}

impl ThemeStore {
    /// Create a store at the platform-default location
    /// (`~/.local/share/prosestat/theme` on Linux and equivalents elsewhere).
    pub fn new() -> ThemeResult<Self> {
        let dirs =
            directories::ProjectDirs::from("", "", APP_NAME).ok_or(ThemeError::NoDataDir)?;
        let dir = Utf8PathBuf::from_path_buf(dirs.data_dir().to_path_buf())
            .map_err(|_| ThemeError::NoDataDir)?;
        Ok(Self::at(dir.join(THEME_FILE)))
    }

    /// Create a store backed by an explicit file path.
    pub fn at<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the preference file.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read the persisted preference.
    ///
    /// Missing files and unrecognized values both read as `None`; callers
    /// fall back to [`Theme::default`].
    #[tracing::instrument(skip_all, fields(path = %self.path))]
    pub fn load(&self) -> Option<Theme> {
        let raw = std::fs::read_to_string(self.path.as_std_path()).ok()?;
        raw.parse().ok()
    }

    /// Persist the preference, creating parent directories as needed.
    #[tracing::instrument(skip_all, fields(path = %self.path, theme = %theme))]
    pub fn save(&self, theme: Theme) -> ThemeResult<()> {
        let wrap = |source| ThemeError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent.as_std_path()).map_err(wrap)?;
        }
        std::fs::write(self.path.as_std_path(), theme.as_str()).map_err(wrap)?;
        tracing::debug!(theme = %theme, "theme persisted");
        Ok(())
    }
}
