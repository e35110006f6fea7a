//! NeuroTriage client facade.
//!
//! Ties the member crates together: decode a case export, normalize its
//! predictions, and produce the sorted review queue plus the dashboard
//! counters. Also home of the generation-tagged [`resource`] cell the
//! views use for fetch state.

pub mod report;
pub mod resource;
pub mod triage;

pub use neurotriage_model as model;
pub use neurotriage_parser as parser;
pub use neurotriage_schema as schema;
pub use neurotriage_session as session;

pub use report::{build_report, render_text, TriageReport};
pub use resource::{Resource, ResourceCell};
pub use triage::{summarize, triage, TriageEntry, TriageSummary};
