use std::fmt;

/// A typed value recovered from a document by an extractor.
///
/// Date facts carry the raw matched substring: normalization happens in the
/// evaluator, because an unparseable date is itself evidence some rules must
/// weigh rather than drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    /// Non-negative integer captured from a pattern group.
    Count(u64),
    /// A date substring as it appeared in the document.
    Date(String),
    /// Narrative evidence: the matched snippet.
    Evidence(String),
}

/// Where a fact was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Index of the `<table>` element, in document order.
    Table(usize),
    /// Index of the string-bearing node, in document order.
    Node(usize),
}

impl Location {
    pub fn table_index(&self) -> Option<usize> {
        match self {
            Self::Table(index) => Some(*index),
            Self::Node(_) => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(index) => write!(f, "table {index}"),
            Self::Node(index) => write!(f, "node {index}"),
        }
    }
}

/// One extraction hit: the fact, where it came from, and which of the
/// request's patterns produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub fact: Fact,
    pub location: Location,
    /// Index into the scan request's pattern list.
    pub pattern: usize,
}
