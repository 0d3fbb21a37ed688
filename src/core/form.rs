//! Form definitions: ordered collections of fields.

use super::error::FormError;
use super::field::FieldDefinition;
use crate::binding::FormInstance;
use serde_json::Value;
use std::collections::HashSet;

/// Ordered, named collection of field definitions.
///
/// Field order is binding and validation order. A definition is built once
/// and then only read, so one definition can back any number of
/// [`FormInstance`]s, including instances validated on different threads.
///
/// # Example
///
/// ```rust
/// use formcheck::core::{field, FormDefinition};
/// use serde_json::json;
///
/// let signup = FormDefinition::new(vec![
///     field("login").not_empty().max_length(32),
///     field("email").not_empty().email(),
///     field("terms").checkbox(),
/// ])
/// .expect("field names are unique");
///
/// assert_eq!(signup.field_names(), ["login", "email", "terms"]);
///
/// let mut form = signup.bind(Some(&json!({ "login": "ada", "email": "nope" })));
/// assert!(!form.validate());
/// assert_eq!(form.messages["email"], ["Invalid email address"]);
/// assert_eq!(form.values["terms"], json!(false));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormDefinition {
    fields: Vec<FieldDefinition>,
}

/// Build a form definition from its fields.
pub fn define_form(fields: Vec<FieldDefinition>) -> Result<FormDefinition, FormError> {
    FormDefinition::new(fields)
}

impl FormDefinition {
    /// Create a form from fields in order.
    ///
    /// Returns [`FormError::DuplicateField`] when two fields share a name.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self, FormError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(FormError::DuplicateField {
                    name: field.name().to_string(),
                });
            }
        }

        Ok(Self { fields })
    }

    /// Form without any fields.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of all fields in definition order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldDefinition::name).collect()
    }

    /// Look a field up by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Create an instance bound to `data`, leaving absent fields `null`.
    pub fn bind(&self, data: Option<&Value>) -> FormInstance<'_> {
        let mut instance = FormInstance::new(self);
        instance.set_data(data, false);
        instance
    }

    /// Create an instance bound to `data`, filling absent fields from defaults.
    pub fn bind_with_defaults(&self, data: Option<&Value>) -> FormInstance<'_> {
        let mut instance = FormInstance::new(self);
        instance.set_data(data, true);
        instance
    }
}
