//! JSON report output for a validation run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};

use urar_model::RunReport;

const REPORT_SCHEMA: &str = "urar-validator.compliance-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ReportPayload {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    document: String,
    results: Map<String, Value>,
    /// Rendered audit-trace lines, in evaluation order.
    trace: Vec<String>,
}

/// Write `compliance_report.json` into `output_dir` and return its path.
pub fn write_report_json(output_dir: &Path, report: &RunReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("compliance_report.json");
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        document: report.document.display().to_string(),
        results: report.to_map(),
        trace: report
            .runs
            .iter()
            .flat_map(|run| run.trace.render())
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
