use std::fmt;

use chrono::{DateTime, Utc};

/// Severity of one trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceSeverity {
    Info,
    Error,
}

impl TraceSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }
}

/// One audit-log line describing an extraction or decision step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub timestamp: DateTime<Utc>,
    pub severity: TraceSeverity,
    pub message: String,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.severity.label(),
            self.message
        )
    }
}

/// Append-only audit log for one validation run.
///
/// The trace is injected into every component of a run instead of living in
/// process-wide logger state, so its lifecycle matches the run that owns it.
/// Entries are also mirrored to the global `tracing` subscriber, which the
/// CLI wires to stderr or a log file.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an informational extraction/decision step.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.push(TraceSeverity::Info, message);
    }

    /// Record a failure of the validation machinery itself.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.push(TraceSeverity::Error, message);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Messages only, without timestamps. Useful for comparing runs.
    pub fn messages(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.message.as_str())
            .collect()
    }

    /// Render every entry as `<timestamp> - <severity> - <message>` lines.
    pub fn render(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, severity: TraceSeverity, message: String) {
        self.entries.push(TraceEntry {
            timestamp: Utc::now(),
            severity,
            message,
        });
    }
}
