use serde::Serialize;
use std::fmt;

/// Outcome of judging one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    WrongAnswer { expected: String, actual: String },
    /// The case input could not be read as a problem.
    RuntimeError { message: String },
}

impl Verdict {
    /// Short verdict code as shown on the judge board.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Accepted => "AC",
            Self::WrongAnswer { .. } => "WA",
            Self::RuntimeError { .. } => "RE",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "ACCEPTED"),
            Self::WrongAnswer { expected, actual } => {
                write!(f, "WA: Expected '{expected}', but got '{actual}'")
            }
            Self::RuntimeError { message } => write!(f, "RE: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub name: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JudgeReport {
    pub results: Vec<CaseResult>,
}

impl JudgeReport {
    pub fn push(&mut self, name: impl Into<String>, verdict: Verdict) {
        self.results.push(CaseResult {
            name: name.into(),
            verdict,
        });
    }

    pub fn accepted(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_accepted()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// True when every case passed. An empty report counts as passing.
    pub fn all_accepted(&self) -> bool {
        self.accepted() == self.total()
    }
}
