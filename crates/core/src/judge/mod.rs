//! Local judge: run the solver over `.in`/`.out` case files and compare output.

mod case;
mod verdict;

pub use case::{TestCase, discover_cases};
pub use verdict::{CaseResult, JudgeReport, Verdict};

use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::input::Problem;
use crate::output::{NotFound, OutputFormat, render};

/// Judges cases with a fixed output format and no-pair policy.
#[derive(Debug, Clone, Default)]
pub struct Judge {
    pub format: OutputFormat,
    pub not_found: NotFound,
}

impl Judge {
    pub fn new(format: OutputFormat, not_found: NotFound) -> Self {
        Self { format, not_found }
    }

    /// Solve `input` and compare the rendered answer with `expected`.
    ///
    /// Both sides are trimmed before comparison, so trailing newlines and
    /// surrounding blanks never decide a verdict.
    pub fn judge_input(&self, input: &str, expected: &str) -> Result<Verdict> {
        let problem = match Problem::parse(input) {
            Ok(problem) => problem,
            Err(e) => {
                return Ok(Verdict::RuntimeError {
                    message: e.to_string(),
                });
            }
        };

        let actual = render(problem.solve(), self.format, &self.not_found)?.unwrap_or_default();
        let expected = expected.trim();
        let actual = actual.trim();

        if actual == expected {
            Ok(Verdict::Accepted)
        } else {
            Ok(Verdict::WrongAnswer {
                expected: expected.to_string(),
                actual: actual.to_string(),
            })
        }
    }

    /// Judge one case. An input file that cannot be read as text is a
    /// `RuntimeError` for this case only.
    pub fn judge_case(&self, case: &TestCase) -> Result<Verdict> {
        let input = match case.read_input() {
            Ok(input) => input,
            Err(e) => {
                warn!("Case '{}': cannot read input: {}", case.name, e);
                return Ok(Verdict::RuntimeError {
                    message: e.to_string(),
                });
            }
        };
        let verdict = self.judge_input(&input, &case.read_expected()?)?;
        debug!("Case '{}': {}", case.name, verdict.code());
        Ok(verdict)
    }

    pub fn judge_dir(&self, dir: &Path) -> Result<JudgeReport> {
        let cases = discover_cases(dir)?;
        info!("Judging {} cases in {}", cases.len(), dir.display());

        let mut report = JudgeReport::default();
        for case in &cases {
            report.push(case.name.clone(), self.judge_case(case)?);
        }
        Ok(report)
    }
}
