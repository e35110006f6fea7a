use serde::{Deserialize, Serialize};

use neurotriage_model::Role;

use crate::SchemaError;

/// An authenticated portal user, as returned by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub speciality: Option<String>,
}

impl UserRecord {
    /// Display name for dashboard headers.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Avatar initials, first two name parts, uppercased.
    pub fn initials(&self) -> String {
        let name = self.full_name();
        let letters: String = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if letters.is_empty() {
            "?".to_string()
        } else {
            letters
        }
    }
}

/// Decodes a user object.
pub fn decode_user(payload: &str) -> Result<UserRecord, SchemaError> {
    Ok(serde_json::from_str(payload)?)
}
