//! Form domain layer
//!
//! Schema, state container and validation for the property form. The
//! submission controller drives the state transitions; the UI only reads.

pub mod schema;

mod form_state;
mod validator;

pub use form_state::{FieldValues, FormState, SubmissionStatus};
pub use schema::{FieldKind, FieldSpec};
pub use validator::validate;

#[cfg(test)]
pub use validator::ValidationError;
