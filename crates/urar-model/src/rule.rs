use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a compliance rule.
///
/// The wire keys are stable: downstream consumers key their result handling
/// on them, so they must not change even if the enum variants are renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleId {
    /// Counts of comparable properties listed and sold in the neighborhood.
    AppraisalComparables,
    /// Every comparable sale date within twelve months of the appraisal date.
    ComparableSaleDates,
    /// Narrative evidence of three-year sales/transfer history research.
    SalesHistoryResearch,
    /// Three comparable sale sections, each reflecting prior sales history.
    ComparableSalesHistory,
}

impl RuleId {
    /// Every rule, in evaluation order.
    pub const ALL: [RuleId; 4] = [
        Self::AppraisalComparables,
        Self::ComparableSaleDates,
        Self::SalesHistoryResearch,
        Self::ComparableSalesHistory,
    ];

    /// Stable key used in the result mapping.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AppraisalComparables => "rule_appraisal",
            Self::ComparableSaleDates => "rule_comparable_sales_dates",
            Self::SalesHistoryResearch => "rule_sales_history",
            Self::ComparableSalesHistory => "rule61",
        }
    }

    /// Short human-readable name of what the rule inspects.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::AppraisalComparables => "the appraisal comparables",
            Self::ComparableSaleDates => "comparable sales dates",
            Self::SalesHistoryResearch => "sales history",
            Self::ComparableSalesHistory => "comparable sales history",
        }
    }

    /// Resolve a wire key back to its rule.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.key() == key)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
