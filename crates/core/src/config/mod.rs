//! Configuration management for pair-finder

mod settings;

pub use settings::{CONFIG_FILE_NAMES, Config};
