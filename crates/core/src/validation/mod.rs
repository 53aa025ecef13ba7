//! Field-level validation for request payloads.

mod errors;
mod rules;

pub use errors::{FieldError, ValidationErrors};
pub use rules::is_valid_email;
