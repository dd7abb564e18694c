//! pair-finder - find two indices whose values sum to a target
//!
//! This crate provides functionality to:
//! - Scan a sequence once with a complement map and report the first matching pair
//! - Read the `n`, values, target input format
//! - Render the result as text or JSON
//! - Judge the solver against `.in`/`.out` case files
pub mod config;
pub mod error;
pub mod finder;
pub mod input;
pub mod judge;
pub mod output;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use finder::{Pair, PairFinder, find_pair};
pub use input::Problem;
pub use judge::{Judge, JudgeReport, Verdict};
pub use output::{NotFound, OutputFormat, render};
