//! Command implementations for the URAR compliance validator.

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use urar_model::RuleId;
use urar_validate::{RuleEngine, write_report_json};

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;
use crate::types::CheckResult;

/// Run the selected rules against the report and optionally write the JSON
/// report file.
pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let span = info_span!("check", report = %args.report.display());
    let _guard = span.enter();

    if let Some(data) = &args.data {
        info!(
            "structured data input {} accepted; no current rule consults it",
            data.display()
        );
    }

    let rules = selected_rules(args);
    let engine = RuleEngine::new();
    let report = engine.check_rules_path(&rules, &args.report);

    let report_path = match &args.report_dir {
        Some(dir) => {
            let path = write_report_json(dir, &report)
                .with_context(|| format!("write report into {}", dir.display()))?;
            info!("compliance report written: {}", path.display());
            Some(path)
        }
        None => None,
    };

    Ok(CheckResult {
        report,
        report_path,
    })
}

/// Print the rule catalog.
pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Checks"]);
    apply_table_style(&mut table);
    for rule in RuleId::ALL {
        table.add_row(vec![rule.key(), rule.describe()]);
    }
    println!("{table}");
}

fn selected_rules(args: &CheckArgs) -> Vec<RuleId> {
    if args.rule.is_empty() {
        return RuleId::ALL.to_vec();
    }
    let mut rules: Vec<RuleId> = args.rule.iter().map(|&arg| arg.into()).collect();
    rules.dedup();
    rules
}
