//! Form and field definitions.
//!
//! Definitions are static descriptions built once with a fluent API and
//! then only read:
//! - [`FieldDefinition`]: name, default value, trim and checkbox flags, rules
//! - [`FormDefinition`]: ordered fields, lookup and instance creation
//! - [`value`]: helpers over bound `serde_json::Value`s

mod error;
mod field;
mod form;
pub mod value;

pub use error::FormError;
pub use field::{field, FieldDefinition};
pub use form::{define_form, FormDefinition};
