use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use neurotriage_model::{CaseStatus, ParsedPrediction, PriorityTier};
use neurotriage_parser::{classify, parse_prediction};

use crate::SchemaError;

/// One medical case as returned by the backend.
///
/// Prediction data arrives in up to three places, oldest first:
/// `cnn_prediction` (legacy string, possibly `"Label:conf"`),
/// `cnn_prediction_num`, and `cnn_confidence`. Precedence for the
/// numeric value is newest-first; the string is only mined for a number
/// when both numeric columns are null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: String,
    pub patient_id: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    pub status: CaseStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cnn_prediction: Option<String>,
    #[serde(default)]
    pub cnn_prediction_num: Option<f64>,
    #[serde(default)]
    pub cnn_confidence: Option<f64>,
    #[serde(default)]
    pub neurologist_report: Option<String>,
    #[serde(default)]
    pub images_count: Option<u32>,
    /// Naive UTC timestamp, as the backend stores it.
    pub created_at: NaiveDateTime,
}

impl CaseRecord {
    /// The numeric confidence supplied outside the legacy string, if any.
    pub fn explicit_confidence(&self) -> Option<f64> {
        self.cnn_confidence.or(self.cnn_prediction_num)
    }

    /// Normalized `(label, confidence)` for this case.
    pub fn parsed(&self) -> ParsedPrediction {
        parse_prediction(self.cnn_prediction.as_deref(), self.explicit_confidence())
    }

    /// Urgency tier for queue sorting and row coloring.
    pub fn tier(&self) -> PriorityTier {
        classify(self.parsed().confidence)
    }

    /// Short case reference shown in list rows (`"Dossier #a1b2c3d4"`).
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map_or(self.id.len(), |(i, _)| i);
        &self.id[..end]
    }
}

/// Decodes a single case object.
pub fn decode_case(payload: &str) -> Result<CaseRecord, SchemaError> {
    Ok(serde_json::from_str(payload)?)
}

/// Decodes a case-list response.
pub fn decode_cases(payload: &str) -> Result<Vec<CaseRecord>, SchemaError> {
    Ok(serde_json::from_str(payload)?)
}
