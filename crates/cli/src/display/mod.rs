pub mod formatter;

pub use formatter::print_judge_report;
