use std::fmt;

use serde::{Deserialize, Serialize};

/// Tri-state outcome of one compliance rule against one document.
///
/// `Error` is reserved for failures of the machinery itself (unreadable
/// document, extraction blow-up). `Failed` means the document was readable
/// but did not satisfy the rule. `Success` is only reported when the rule's
/// predicate held over a non-empty evidence set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Success,
    Failed,
    Error,
}

impl Verdict {
    /// Wire form, as emitted in the result mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Error => "error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
