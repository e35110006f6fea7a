use neurotriage_model::ParsedPrediction;

/// Parses the backend's raw prediction field into a `(label, confidence)`
/// pair.
///
/// The raw field is either a bare label (`"Malade"`) or a legacy composite
/// string (`"Malade:0.9559"`). Composite strings split on the **last**
/// colon, so a label may itself contain colons (`"A:B:0.5"` yields label
/// `"A:B"`). When the backend supplies a separate numeric confidence it is
/// passed as `explicit` and always wins over a value embedded in the
/// string.
///
/// Failure handling: a non-numeric or non-finite suffix degrades to `None`
/// confidence with the label kept; nothing here panics. Numeric values are
/// passed through unclamped, including values outside `[0, 1]`.
pub fn parse_prediction(raw: Option<&str>, explicit: Option<f64>) -> ParsedPrediction {
    let trimmed = match raw {
        Some(s) => s.trim(),
        None => return ParsedPrediction::new(None, explicit),
    };
    if trimmed.is_empty() {
        return ParsedPrediction::new(None, explicit);
    }

    match trimmed.rsplit_once(':') {
        Some((left, right)) => {
            let embedded = match right.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    log::debug!("non-numeric confidence suffix {right:?}, degrading to none");
                    None
                }
            };
            ParsedPrediction::new(non_blank(left), explicit.or(embedded))
        }
        None => ParsedPrediction::new(non_blank(trimmed), explicit),
    }
}

/// A blank label is no label.
fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}
