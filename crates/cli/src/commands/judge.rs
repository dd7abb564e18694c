use anyhow::{Context, Result, bail};
use pair_finder_core::Judge;
use std::path::Path;
use tracing::info;

use crate::cli::JudgeArgs;
use crate::commands::load_config;
use crate::display::print_judge_report;

pub fn judge_command(config_path: Option<&Path>, args: &JudgeArgs) -> Result<()> {
    let config = load_config(config_path, &args.output)?;
    let dir = args.dir.clone().unwrap_or_else(|| config.cases_dir());

    let judge = Judge::new(config.output_format(), config.not_found());
    let report = judge
        .judge_dir(&dir)
        .with_context(|| format!("Failed to judge cases in {}", dir.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_judge_report(&report, &mut std::io::stdout().lock())?;
    }

    if !report.all_accepted() {
        bail!(
            "{} of {} cases not accepted",
            report.total() - report.accepted(),
            report.total()
        );
    }

    info!("All {} cases accepted", report.total());
    Ok(())
}
