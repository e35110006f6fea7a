//! Core derived types shared by the NeuroTriage client crates.
//!
//! Everything here is recomputed from fresh backend responses on every
//! decode; nothing is persisted client-side.

pub mod case;
pub mod prediction;
pub mod tier;

pub use case::{CaseStatus, Role};
pub use prediction::ParsedPrediction;
pub use tier::PriorityTier;
