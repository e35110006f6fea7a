//! Rendering of the triage queue as text or JSON.

use std::fmt::Write as _;

use serde::Serialize;

use neurotriage_schema::CaseRecord;

use crate::triage::{summarize, triage, TriageEntry, TriageSummary};

/// Everything the `json` output mode emits.
#[derive(Debug, Serialize)]
pub struct TriageReport {
    pub summary: TriageSummary,
    pub entries: Vec<TriageEntry>,
}

pub fn build_report(cases: &[CaseRecord]) -> TriageReport {
    TriageReport {
        summary: summarize(cases),
        entries: triage(cases),
    }
}

/// Text review queue, one row per case, most urgent first.
pub fn render_text(report: &TriageReport) -> String {
    let mut out = String::new();
    let s = &report.summary;
    let _ = writeln!(
        out,
        "{} case(s), {} pending, {} urgent",
        s.total, s.pending, s.urgent
    );
    for entry in &report.entries {
        let _ = writeln!(out, "{}", render_row(entry));
    }
    out
}

fn render_row(entry: &TriageEntry) -> String {
    let tier = entry.tier.to_string().to_uppercase();
    let percent = match entry.confidence {
        Some(c) => format!("{:.1}%", c * 100.0),
        None => "-".to_string(),
    };
    let label = entry.label.as_deref().unwrap_or("-");
    let patient = entry.patient_name.as_deref().unwrap_or("-");
    format!(
        "{tier:<8} {percent:>7}  {label:<12} #{}  {patient}  ({})",
        entry.short_id, entry.status
    )
}
