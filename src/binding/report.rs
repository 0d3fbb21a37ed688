//! Validation results handed back to hosts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// One recorded message for one field.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Detached snapshot of a form instance, ready to serialize into a response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub values: Map<String, Value>,
    pub messages: BTreeMap<String, Vec<String>>,
    pub is_valid: bool,
}
