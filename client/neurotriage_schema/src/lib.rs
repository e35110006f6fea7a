//! Typed decoding of the case-management REST responses.
//!
//! The backend returns case and user objects with many fields this
//! client never touches; the schemas here name the ones it does and
//! ignore the rest. Shape violations surface as [`SchemaError::Shape`]
//! instead of silently producing missing fields.

pub mod case;
pub mod error;
pub mod user;

pub use case::{decode_case, decode_cases, CaseRecord};
pub use error::SchemaError;
pub use user::{decode_user, UserRecord};
