//! Rendering of a scan result to the single output line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::finder::Pair;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `first second`
    #[default]
    Text,
    /// `{"first":F,"second":S}` or `null`
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::ConfigError(format!(
                "Unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// What to print when no pair sums to the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NotFound {
    #[default]
    Silent,
    Sentinel(String),
}

impl NotFound {
    /// An empty sentinel means silence, not a blank line.
    pub fn from_sentinel(sentinel: Option<String>) -> Self {
        sentinel
            .filter(|s| !s.is_empty())
            .map_or(Self::Silent, Self::Sentinel)
    }
}

/// Render `result` as one output line, without the trailing newline.
///
/// Returns `None` when nothing should be printed.
pub fn render(result: Option<Pair>, format: OutputFormat, not_found: &NotFound) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(match (result, not_found) {
            (Some(pair), _) => Some(format!("{} {}", pair.first, pair.second)),
            (None, NotFound::Silent) => None,
            (None, NotFound::Sentinel(sentinel)) => Some(sentinel.clone()),
        }),
        OutputFormat::Json => Ok(Some(serde_json::to_string(&result)?)),
    }
}
