use pair_finder_core::JudgeReport;
use std::io::{self, Write};

/// One `name: VERDICT` line per case, then an `N/M accepted` summary.
pub fn print_judge_report<W: Write>(report: &JudgeReport, out: &mut W) -> io::Result<()> {
    for result in &report.results {
        writeln!(out, "{}: {}", result.name, result.verdict)?;
    }
    writeln!(out, "{}/{} accepted", report.accepted(), report.total())
}
