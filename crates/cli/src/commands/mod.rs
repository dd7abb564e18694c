pub mod judge;
pub mod solve;

pub use judge::judge_command;
pub use solve::solve_command;

use anyhow::{Context, Result};
use pair_finder_core::Config;
use std::path::Path;
use tracing::debug;

use crate::cli::OutputArgs;

/// Resolve the effective config: explicit file or nearest discovered one, then CLI flags.
pub(crate) fn load_config(explicit: Option<&Path>, output: &OutputArgs) -> Result<Config> {
    let base = match explicit {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Config::discover(&cwd)?
        }
    };

    let overlay = Config {
        format: output.format,
        sentinel: output.sentinel.clone(),
        cases_dir: None,
    };

    let config = base.merge(overlay);
    debug!("Effective config: {:?}", config);
    Ok(config)
}
