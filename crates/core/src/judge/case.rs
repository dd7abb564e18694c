use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;

/// A named `.in`/`.out` file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub input_path: PathBuf,
    pub expected_path: PathBuf,
}

impl TestCase {
    /// Build the case for `<name>.in`; the expected output is the sibling `<name>.out`.
    ///
    /// Only the final extension is swapped, so dotted names like `case.1` survive.
    pub fn from_input(input_path: &Path) -> Self {
        let name = input_path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            input_path: input_path.to_path_buf(),
            expected_path: input_path.with_extension("out"),
        }
    }

    pub fn read_input(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.input_path)?)
    }

    pub fn read_expected(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.expected_path)?)
    }
}

/// Collect every case in `dir`, sorted by name.
///
/// An input without a matching `.out` file is skipped.
pub fn discover_cases(dir: &Path) -> Result<Vec<TestCase>> {
    let mut cases = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "in") {
            continue;
        }

        let case = TestCase::from_input(&path);
        if !case.expected_path.is_file() {
            warn!("Skipping {}: no expected output file", path.display());
            continue;
        }

        debug!("Discovered case '{}'", case.name);
        cases.push(case);
    }

    cases.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cases)
}
