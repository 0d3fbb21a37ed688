//! Binding input data to a form and running its rules.
//!
//! A [`FormInstance`] pairs a shared [`FormDefinition`](crate::core::FormDefinition)
//! with one snapshot of input data. Binding (`set_data`) only normalizes raw
//! input; validation (`validate`) runs each field's rule chain through a
//! fresh [`FieldContext`], stopping at the first failing rule, and stores the
//! resulting values and messages back on the instance.

mod context;
mod instance;
mod report;

pub use context::FieldContext;
pub use instance::FormInstance;
pub use report::{FieldError, FormState};
