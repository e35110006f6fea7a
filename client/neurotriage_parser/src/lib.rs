//! Normalization of the backend's prediction fields and derivation of
//! the triage priority tier.
//!
//! Both operations are pure, synchronous, and total: malformed input
//! degrades to `None` confidence, it never errors.

pub mod prediction;
pub mod triage;

pub use prediction::parse_prediction;
pub use triage::classify;
