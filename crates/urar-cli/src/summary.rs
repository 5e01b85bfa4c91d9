//! Human-readable verdict summary for `check` runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use serde_json::Value;

use urar_model::{RuleRun, Verdict};

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult) {
    println!("Document: {}", result.report.document.display());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Verdict"),
        header_cell("Facts"),
    ]);
    apply_table_style(&mut table);
    for run in &result.report.runs {
        table.add_row(vec![
            Cell::new(run.outcome.rule.key()),
            verdict_cell(run.outcome.verdict),
            Cell::new(facts_column(run)),
        ]);
    }
    println!("{table}");

    match serde_json::to_string_pretty(&Value::Object(result.report.to_map())) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("error: failed to render result mapping: {error}"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn verdict_cell(verdict: Verdict) -> Cell {
    let color = match verdict {
        Verdict::Success => Color::Green,
        Verdict::Failed => Color::Yellow,
        Verdict::Error => Color::Red,
    };
    Cell::new(verdict.as_str()).fg(color)
}

fn facts_column(run: &RuleRun) -> String {
    match &run.outcome.comparables {
        Some(counts) => format!("listed={}, sold={}", counts.listed, counts.sold),
        None => "-".to_string(),
    }
}
