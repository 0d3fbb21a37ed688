//! Form instances: bound data plus validation state.

use super::context::FieldContext;
use super::report::{FieldError, FormState};
use crate::core::{value, FieldDefinition, FormDefinition};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Live binding of a [`FormDefinition`] to one set of input data.
///
/// `values`, `messages` and `is_valid` are public so hosts can read them
/// directly and adjust them when needed. `values` keeps field order.
///
/// An instance is plain mutable state: every operation takes `&mut self`
/// and nothing here locks. Share the definition, not the instance.
#[derive(Clone, Debug)]
pub struct FormInstance<'a> {
    definition: &'a FormDefinition,
    pub values: Map<String, Value>,
    pub messages: BTreeMap<String, Vec<String>>,
    pub is_valid: bool,
}

impl<'a> FormInstance<'a> {
    /// Create an unbound, valid instance. Use [`FormDefinition::bind`] to
    /// create one with data.
    pub fn new(definition: &'a FormDefinition) -> Self {
        Self {
            definition,
            values: Map::new(),
            messages: BTreeMap::new(),
            is_valid: true,
        }
    }

    pub fn definition(&self) -> &'a FormDefinition {
        self.definition
    }

    /// Bind raw input data to every field.
    ///
    /// Non-object `data` counts as no data. Values are taken as-is (trimming
    /// happens during validation); checkboxes are coerced to booleans and
    /// read as unchecked when absent. With `use_defaults`, absent fields get
    /// their default value, otherwise `null`.
    ///
    /// Every field's entry is replaced; messages and validity are untouched.
    pub fn set_data(&mut self, data: Option<&Value>, use_defaults: bool) {
        let data = data.and_then(Value::as_object);

        for field in self.definition.fields() {
            let supplied = data.and_then(|data| data.get(field.name()));
            let bound = bind_value(field, supplied, use_defaults);
            self.values.insert(field.name().to_string(), bound);
        }

        tracing::debug!(fields = self.definition.len(), use_defaults, "bound form data");
    }

    /// Validate every field. Returns the overall validity.
    pub fn validate(&mut self) -> bool {
        let definition = self.definition;
        self.run(definition.fields().iter())
    }

    /// Validate only the named fields, still in form order.
    ///
    /// Fields left out keep their values and messages from earlier runs.
    pub fn validate_fields<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        let definition = self.definition;
        let included =
            |field: &&FieldDefinition| names.iter().any(|name| name.as_ref() == field.name());
        self.run(definition.fields().iter().filter(included))
    }

    fn run<'f>(&mut self, fields: impl Iterator<Item = &'f FieldDefinition>) -> bool {
        for field in fields {
            let current = self.values.get(field.name()).cloned().unwrap_or(Value::Null);
            let (value, messages) = run_rules(field, current);

            self.values.insert(field.name().to_string(), value);

            if messages.is_empty() {
                self.messages.remove(field.name());
            } else {
                self.is_valid = false;
                self.messages.insert(field.name().to_string(), messages);
            }
        }

        tracing::debug!(is_valid = self.is_valid, "validated form");
        self.is_valid
    }

    /// Clear all messages and mark the instance valid again.
    ///
    /// Values stay as they are; call [`set_data`](Self::set_data) or
    /// [`restore_defaults`](Self::restore_defaults) to repopulate them.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.is_valid = true;
    }

    /// Reset, then rebind every field to its default value.
    pub fn restore_defaults(&mut self) {
        self.reset();
        self.values.clear();
        self.set_data(None, true);
    }

    /// Record a message found outside the rule engine and mark the instance
    /// invalid.
    ///
    /// Useful for errors only the host can detect, such as a login that is
    /// already taken. The field does not have to be defined on the form.
    pub fn message(&mut self, field_name: impl Into<String>, text: impl Into<String>) {
        self.messages
            .entry(field_name.into())
            .or_default()
            .push(text.into());
        self.is_valid = false;
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Messages recorded for a field, empty when there are none.
    pub fn messages_for(&self, name: &str) -> &[String] {
        self.messages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_messages(&self, name: &str) -> bool {
        self.messages.contains_key(name)
    }

    /// All recorded messages as one accumulated result.
    ///
    /// Fields are reported in form order, followed by messages for names the
    /// form does not define.
    pub fn report(&self) -> Validation<(), NonEmptyVec<FieldError>> {
        let declared = self
            .definition
            .fields()
            .iter()
            .map(FieldDefinition::name)
            .filter_map(|name| self.messages.get_key_value(name));
        let undeclared = self
            .messages
            .iter()
            .filter(|(name, _)| self.definition.field(name).is_none());

        let mut checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = Vec::new();
        for (field, messages) in declared.chain(undeclared) {
            for message in messages {
                checks.push(Validation::fail(FieldError {
                    field: field.clone(),
                    message: message.clone(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Snapshot of the current state, detached from the definition.
    pub fn state(&self) -> FormState {
        FormState {
            values: self.values.clone(),
            messages: self.messages.clone(),
            is_valid: self.is_valid,
        }
    }
}

fn bind_value(field: &FieldDefinition, supplied: Option<&Value>, use_defaults: bool) -> Value {
    match supplied {
        Some(raw) if field.is_checkbox() => Value::Bool(value::is_truthy(raw)),
        Some(raw) => raw.clone(),
        None if field.is_checkbox() => match field.default_value() {
            Value::Bool(checked) => Value::Bool(*checked),
            _ => Value::Bool(false),
        },
        None if use_defaults => field.default_value().clone(),
        None => Value::Null,
    }
}

/// Run a field's rule chain, stopping at the first failing rule.
fn run_rules(field: &FieldDefinition, current: Value) -> (Value, Vec<String>) {
    let seed = if field.trims() {
        value::trim(current)
    } else {
        current
    };
    let mut ctx = FieldContext::new(field, seed);

    for rule in field.rules() {
        if !rule.apply(&mut ctx) {
            tracing::trace!(field = field.name(), rule = rule.name(), "rule failed");
            break;
        }
    }

    ctx.into_parts()
}
