//! CLI argument definitions for the URAR compliance validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use urar_model::RuleId;

#[derive(Parser)]
#[command(
    name = "urar-validator",
    version,
    about = "URAR compliance validator - check HTML appraisal reports against underwriting rules",
    long_about = "Validate HTML appraisal reports (URAR-style documents) against \
                  underwriting compliance rules.\n\n\
                  Each rule independently scans the parsed report and returns \
                  success, failed, or error, together with an audit trace of every \
                  extraction decision."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q to quiet).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an appraisal report and print per-rule verdicts.
    Check(CheckArgs),

    /// List the compliance rules and their result keys.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the HTML appraisal report.
    #[arg(value_name = "REPORT_HTML")]
    pub report: PathBuf,

    /// Reserved structured-data sidecar; accepted for interface
    /// compatibility but not consulted by any current rule.
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Run only the given rule (repeatable; default: all rules).
    #[arg(long = "rule", value_enum, value_name = "RULE")]
    pub rule: Vec<RuleArg>,

    /// Write compliance_report.json into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    /// Comparable listed/sold counts (rule_appraisal).
    Appraisal,
    /// Comparable sale recency (rule_comparable_sales_dates).
    SaleDates,
    /// Three-year history research narrative (rule_sales_history).
    SalesHistory,
    /// Prior history per comparable (rule61).
    ComparableHistory,
}

impl From<RuleArg> for RuleId {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Appraisal => RuleId::AppraisalComparables,
            RuleArg::SaleDates => RuleId::ComparableSaleDates,
            RuleArg::SalesHistory => RuleId::SalesHistoryResearch,
            RuleArg::ComparableHistory => RuleId::ComparableSalesHistory,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
