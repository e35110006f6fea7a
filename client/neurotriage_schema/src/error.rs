use serde_json::error::Category;
use thiserror::Error;

/// Failure decoding a backend response.
///
/// `Syntax` means the payload was not JSON at all; `Shape` means it was
/// well-formed JSON that does not match the declared schema. The split
/// lets callers treat a truncated proxy response differently from a
/// contract drift between client and backend.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("malformed JSON at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("response shape mismatch: {0}")]
    Shape(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => SchemaError::Syntax {
                line: err.line(),
                column: err.column(),
            },
            Category::Data | Category::Io => SchemaError::Shape(err.to_string()),
        }
    }
}

impl SchemaError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, SchemaError::Syntax { .. })
    }
}
