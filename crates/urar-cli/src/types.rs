//! Result types shared between the CLI commands and the summary printer.

use std::path::PathBuf;

use urar_model::RunReport;

/// Everything a `check` invocation produced.
#[derive(Debug)]
pub struct CheckResult {
    pub report: RunReport,
    /// Where the JSON report was written, when requested.
    pub report_path: Option<PathBuf>,
}

impl CheckResult {
    /// Exit successfully only when every selected rule passed.
    pub fn all_success(&self) -> bool {
        self.report.all_success()
    }
}
