// End-to-end: backend payload -> typed records -> normalized
// predictions -> sorted review queue and dashboard counters.

use pretty_assertions::assert_eq;

use neurotriage::report::{build_report, render_text};
use neurotriage::triage::{summarize, triage};
use neurotriage_model::{CaseStatus, PriorityTier};
use neurotriage_schema::decode_cases;
use tests::case_export;

#[test]
fn decodes_every_prediction_vintage() {
    let cases = decode_cases(case_export()).unwrap();
    assert_eq!(cases.len(), 4);

    // legacy composite string
    let parsed = cases[0].parsed();
    assert_eq!(parsed.label.as_deref(), Some("Malade"));
    assert_eq!(parsed.confidence, Some(0.9559));

    // bare label with numeric column
    let parsed = cases[1].parsed();
    assert_eq!(parsed.label.as_deref(), Some("Sain"));
    assert_eq!(parsed.confidence, Some(0.12));

    // numeric confidence only
    let parsed = cases[2].parsed();
    assert_eq!(parsed.label, None);
    assert_eq!(parsed.confidence, Some(0.66));

    // nothing yet
    let parsed = cases[3].parsed();
    assert_eq!(parsed.label, None);
    assert_eq!(parsed.confidence, None);
}

#[test]
fn queue_is_sorted_by_urgency() {
    let cases = decode_cases(case_export()).unwrap();
    let entries = triage(&cases);

    let tiers: Vec<PriorityTier> = entries.iter().map(|e| e.tier).collect();
    assert_eq!(
        tiers,
        vec![
            PriorityTier::High,
            PriorityTier::Medium,
            PriorityTier::Low,
            PriorityTier::Unknown,
        ]
    );
    assert_eq!(entries[0].patient_name.as_deref(), Some("Jean Dupont"));
    assert_eq!(entries[3].status, CaseStatus::Completed);
}

#[test]
fn summary_matches_the_dashboard_cards() {
    let cases = decode_cases(case_export()).unwrap();
    let summary = summarize(&cases);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.pending, 2);
    assert_eq!(summary.urgent, 1);
}

#[test]
fn text_report_renders_the_whole_queue() {
    let cases = decode_cases(case_export()).unwrap();
    let text = render_text(&build_report(&cases));
    // header plus one row per case
    assert_eq!(text.lines().count(), 5);
    assert!(text.starts_with("4 case(s), 2 pending, 1 urgent"));
    assert!(text.contains("Malade"));
    assert!(text.contains("#6f9619ff"));
}

#[test]
fn json_report_round_trips_through_serde() {
    let cases = decode_cases(case_export()).unwrap();
    let value = serde_json::to_value(build_report(&cases)).unwrap();
    assert_eq!(value["summary"]["total"], 4);
    assert_eq!(value["entries"][0]["tier"], "high");
    assert_eq!(value["entries"][0]["label"], "Malade");
    assert_eq!(value["entries"][3]["confidence"], serde_json::Value::Null);
}

#[test]
fn truncated_payload_reports_a_syntax_error() {
    let full = case_export();
    let err = decode_cases(&full[..full.len() / 2]).unwrap_err();
    assert!(err.is_syntax());
}

#[test]
fn unknown_status_does_not_fail_the_payload() {
    let payload = case_export().replace("\"completed\"", "\"archived\"");
    let cases = decode_cases(&payload).unwrap();
    assert_eq!(cases[3].status, CaseStatus::Unknown);
}
