// The prediction-normalization contract, exercised through the parser
// API directly and cross-checked against the schema-level accessors.

use pretty_assertions::assert_eq;

use neurotriage_model::PriorityTier;
use neurotriage_parser::{classify, parse_prediction};
use neurotriage_schema::decode_cases;
use tests::case_export;

#[test]
fn parser_and_schema_agree_on_every_fixture_case() {
    let cases = decode_cases(case_export()).unwrap();
    for case in &cases {
        let direct =
            parse_prediction(case.cnn_prediction.as_deref(), case.explicit_confidence());
        assert_eq!(direct, case.parsed());
        assert_eq!(classify(direct.confidence), case.tier());
    }
}

#[test]
fn last_colon_split_keeps_colons_in_the_label() {
    let p = parse_prediction(Some("A:B:0.5"), None);
    assert_eq!(p.label.as_deref(), Some("A:B"));
    assert_eq!(p.confidence, Some(0.5));
    assert_eq!(classify(p.confidence), PriorityTier::Low);
}

#[test]
fn explicit_confidence_drives_the_tier() {
    let p = parse_prediction(Some("Malade:0.2"), Some(0.9));
    assert_eq!(p.confidence, Some(0.9));
    assert_eq!(classify(p.confidence), PriorityTier::High);
}

#[test]
fn tiers_cover_the_threshold_table() {
    assert_eq!(classify(None), PriorityTier::Unknown);
    assert_eq!(classify(Some(0.81)), PriorityTier::High);
    assert_eq!(classify(Some(0.8)), PriorityTier::Medium);
    assert_eq!(classify(Some(0.5001)), PriorityTier::Medium);
    assert_eq!(classify(Some(0.5)), PriorityTier::Low);
}
