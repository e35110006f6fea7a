use serde::{Deserialize, Serialize};

/// A normalized view of the backend's heterogeneous prediction fields.
///
/// The backend historically stored predictions as a composite string
/// (`"Malade:0.9559"`), later as a bare label plus separate numeric
/// confidence. This pair is the single shape the views consume.
///
/// Invariants upheld by the parser:
/// - `label` is never `Some("")`; blank labels collapse to `None`.
/// - `confidence` is `None` whenever no numeric value was available;
///   out-of-range values are passed through unclamped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedPrediction {
    pub label: Option<String>,
    pub confidence: Option<f64>,
}

impl ParsedPrediction {
    pub fn new(label: Option<String>, confidence: Option<f64>) -> Self {
        ParsedPrediction { label, confidence }
    }

    /// True when either half of the prediction is available.
    pub fn has_prediction(&self) -> bool {
        self.label.is_some() || self.confidence.is_some()
    }

    /// Confidence as a display percentage (`0.9559` -> `95.59`).
    ///
    /// No rounding or clamping here; formatting is a view concern.
    pub fn percent(&self) -> Option<f64> {
        self.confidence.map(|c| c * 100.0)
    }
}
