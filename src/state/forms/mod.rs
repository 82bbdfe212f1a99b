//! Form domain layer
//!
//! Field values, submission phases and focus handling for the demo request
//! form.

mod field;
mod form_state;

pub use field::{DemoRequestFields, FieldKey};
pub use form_state::{
    ContactFormFocus, Form, FormPhase, FormState, FormStatus, SubmissionReceipt,
};
