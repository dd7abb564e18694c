use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::output::{NotFound, OutputFormat};

/// File names searched for in each directory, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".pair-finder.json", "pair-finder.json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Line printed when no pair exists. Unset means print nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<String>,

    /// Directory holding `.in`/`.out` case files for `judge`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases_dir: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config above `start_path`, or the default when none exists.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No config file found from {}", start_path.display());
                Ok(Self::default())
            }
        }
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(mut self, other: Config) -> Self {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.sentinel.is_some() {
            self.sentinel = other.sentinel;
        }
        if other.cases_dir.is_some() {
            self.cases_dir = other.cases_dir;
        }
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn not_found(&self) -> NotFound {
        NotFound::from_sentinel(self.sentinel.clone())
    }

    pub fn cases_dir(&self) -> PathBuf {
        self.cases_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("tests"))
    }
}
