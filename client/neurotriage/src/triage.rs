//! Review-queue ordering and dashboard counters.

use serde::Serialize;

use neurotriage_model::{CaseStatus, PriorityTier};
use neurotriage_schema::CaseRecord;

/// One row of the neurologist review queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageEntry {
    pub case_id: String,
    /// First eight characters of the id, as the list views show it.
    pub short_id: String,
    pub patient_name: Option<String>,
    pub label: Option<String>,
    pub confidence: Option<f64>,
    pub tier: PriorityTier,
    pub status: CaseStatus,
}

impl TriageEntry {
    pub fn from_case(case: &CaseRecord) -> Self {
        let parsed = case.parsed();
        TriageEntry {
            case_id: case.id.clone(),
            short_id: case.short_id().to_string(),
            patient_name: case.patient_name.clone(),
            tier: neurotriage_parser::classify(parsed.confidence),
            label: parsed.label,
            confidence: parsed.confidence,
            status: case.status,
        }
    }
}

/// Builds the review queue: most urgent tier first, higher confidence
/// first within a tier, case id as the final tie-breaker so the order
/// is stable across refreshes.
pub fn triage(cases: &[CaseRecord]) -> Vec<TriageEntry> {
    let mut entries: Vec<TriageEntry> = cases.iter().map(TriageEntry::from_case).collect();
    entries.sort_by(|a, b| {
        b.tier
            .cmp(&a.tier)
            .then_with(|| {
                b.confidence
                    .unwrap_or(f64::NEG_INFINITY)
                    .total_cmp(&a.confidence.unwrap_or(f64::NEG_INFINITY))
            })
            .then_with(|| a.case_id.cmp(&b.case_id))
    });
    entries
}

/// Dashboard stat-card counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriageSummary {
    /// All cases, any status.
    pub total: usize,
    /// Cases still awaiting review.
    pub pending: usize,
    /// Cases in the high tier (derived confidence above 0.8).
    pub urgent: usize,
}

pub fn summarize(cases: &[CaseRecord]) -> TriageSummary {
    TriageSummary {
        total: cases.len(),
        pending: cases.iter().filter(|c| c.status.is_pending()).count(),
        urgent: cases.iter().filter(|c| c.tier().is_urgent()).count(),
    }
}
