//! Formcheck: declarative form definitions and validation
//!
//! Describe a form once as an ordered list of named fields with defaults and
//! validation rules, then apply that description to each incoming data
//! object to get normalized values and per-field messages.
//!
//! # Core Concepts
//!
//! - **Field definitions**: name, default value, trimming, checkbox handling
//!   and an ordered rule chain, built with a fluent API
//! - **Form definitions**: ordered, read-only collections of fields that can
//!   be shared by any number of instances
//! - **Form instances**: bound values, messages per field and overall validity
//! - **Rules**: typed checks that stop a field's chain at the first failure
//!
//! Failed validation is data, not an error: messages land on the instance
//! and `is_valid` flips to `false`. Only building a form with duplicate field
//! names returns an error.
//!
//! # Example
//!
//! ```rust
//! use formcheck::core::{field, FieldDefinition, FormDefinition};
//! use serde_json::json;
//!
//! let form = FormDefinition::new(vec![
//!     FieldDefinition::with_default("field1", "").not_empty(),
//!     FieldDefinition::with_default("field2", "foo bar").max_length(4),
//!     FieldDefinition::with_default("field3", "foo").min_length(4),
//!     FieldDefinition::with_default("field4", "foo@bar.pl").not_empty().email(),
//!     field("remember").checkbox(),
//! ])
//! .unwrap();
//!
//! let mut instance = form.bind_with_defaults(None);
//! assert!(!instance.validate());
//!
//! assert_eq!(instance.messages["field1"], ["Field cannot be empty"]);
//! assert_eq!(instance.messages["field2"], ["Field value is too long (limit 4)"]);
//! assert_eq!(instance.messages["field3"], ["Field value is too short (limit 4)"]);
//! assert!(!instance.messages.contains_key("field4"));
//! assert_eq!(instance.values["remember"], json!(false));
//!
//! // Errors only the host can see go through the same channel.
//! instance.reset();
//! instance.message("field4", "Address already registered");
//! assert!(!instance.is_valid);
//! ```

pub mod binding;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use binding::{FieldContext, FieldError, FormInstance, FormState};
pub use core::{define_form, field, FieldDefinition, FormDefinition, FormError};
pub use rules::{EmailSyntax, Message, Rule};
