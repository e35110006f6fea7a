use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency bucket derived from a case's model confidence, used to sort
/// and color the review queue.
///
/// Variant order matters: `Ord` ranks `Unknown` lowest and `High`
/// highest, so a descending sort puts the most urgent cases first and
/// cases without a prediction last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Unknown,
    Low,
    Medium,
    High,
}

impl PriorityTier {
    /// The card styling the views attach to a case row at this tier.
    pub fn css_class(&self) -> &'static str {
        match self {
            PriorityTier::Unknown => "bg-slate-50 border-slate-100",
            PriorityTier::Low => "bg-green-50 border-green-200",
            PriorityTier::Medium => "bg-yellow-50 border-yellow-200",
            PriorityTier::High => "bg-red-50 border-red-200",
        }
    }

    /// High-tier cases feed the dashboard's "urgent" counter.
    pub fn is_urgent(&self) -> bool {
        matches!(self, PriorityTier::High)
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriorityTier::Unknown => "unknown",
            PriorityTier::Low => "low",
            PriorityTier::Medium => "medium",
            PriorityTier::High => "high",
        };
        f.write_str(name)
    }
}
