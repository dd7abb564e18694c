use anyhow::{Context, Result};
use pair_finder_core::{Problem, render};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::cli::SolveArgs;
use crate::commands::load_config;
use crate::utils::open_input;

pub fn solve_command(config_path: Option<&Path>, args: &SolveArgs) -> Result<()> {
    let config = load_config(config_path, &args.output)?;

    let reader = open_input(args.input.as_deref())?;
    let problem = Problem::read_from(reader).context("Failed to read problem")?;
    debug!(
        "Solving for target {} over {} values",
        problem.target,
        problem.nums.len()
    );

    let result = problem.solve();
    let line = render(result, config.output_format(), &config.not_found())?;

    if let Some(line) = line {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")?;
    }

    Ok(())
}
