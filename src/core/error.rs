//! Form construction errors.

use thiserror::Error;

/// Errors that can occur when building a form definition.
///
/// These signal programmer misuse and are returned from construction only.
/// Failed validation is never an error; it is recorded on the form instance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Field \"{name}\" is defined more than once")]
    DuplicateField { name: String },
}
