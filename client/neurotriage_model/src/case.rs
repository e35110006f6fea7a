use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a medical case, as stored by the backend.
///
/// The backend's status column is free text; anything outside the known
/// vocabulary decodes to `Unknown` rather than failing the whole payload,
/// so a new backend status never breaks existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pending,
    Analyzed,
    Completed,
    #[serde(other)]
    Unknown,
}

impl CaseStatus {
    /// Pending cases feed the dashboard's "awaiting review" counter.
    pub fn is_pending(&self) -> bool {
        matches!(self, CaseStatus::Pending)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStatus::Pending => "pending",
            CaseStatus::Analyzed => "analyzed",
            CaseStatus::Completed => "completed",
            CaseStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Portal role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Neurologist,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Patient => "patient",
            Role::Neurologist => "neurologist",
            Role::Admin => "admin",
        };
        f.write_str(name)
    }
}
