//! Form domain layer
//!
//! The prompt form's values, the single-field update they accept, and
//! keyboard focus across the fields and the Copy Prompt button.

mod field;
mod form_state;

pub use field::{FieldKind, FieldName};
pub use form_state::{Form, FormState, PromptForm};
