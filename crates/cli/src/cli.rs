use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pair_finder_core::OutputFormat;
use std::path::PathBuf;

use crate::commands::{judge_command, solve_command};

/// Find two indices whose values sum to a target
#[derive(Parser, Debug)]
#[command(name = "pair-finder")]
#[command(version, about, long_about = None)]
#[command(after_help = "INPUT:\n    n, then n integers, then the target, whitespace-separated\n\nENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Config file to use instead of the nearest .pair-finder.json
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read one problem and print the first pair of indices (default)
    #[command(visible_alias = "s")]
    Solve(SolveArgs),
    /// Run the solver over .in/.out case files and report verdicts
    #[command(visible_alias = "j")]
    Judge(JudgeArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Line to print when no pair exists (default: print nothing)
    #[arg(short, long, allow_hyphen_values = true)]
    pub sentinel: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct SolveArgs {
    /// Read the problem from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Default, Clone)]
pub struct JudgeArgs {
    /// Directory holding caseN.in / caseN.out files (default: tests)
    pub dir: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let config = self.config.as_deref();
        match self.command.unwrap_or_else(|| Commands::Solve(SolveArgs::default())) {
            Commands::Solve(args) => solve_command(config, &args),
            Commands::Judge(args) => judge_command(config, &args),
        }
    }
}
