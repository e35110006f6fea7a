use neurotriage_model::PriorityTier;

/// Maps a normalized confidence to its urgency tier.
///
/// Thresholds match the review dashboard: above 0.8 is high, above 0.5
/// is medium, the rest low, and a missing confidence is unknown. Total
/// over all reals; values outside `[0, 1]` fall into the same buckets
/// with no special-casing.
pub fn classify(confidence: Option<f64>) -> PriorityTier {
    match confidence {
        None => PriorityTier::Unknown,
        Some(c) if c > 0.8 => PriorityTier::High,
        Some(c) if c > 0.5 => PriorityTier::Medium,
        Some(_) => PriorityTier::Low,
    }
}
