//! Per-field working state for one validation pass.

use crate::core::FieldDefinition;
use serde_json::Value;

/// Working value and collected messages of one field while its rules run.
///
/// A context is created fresh for every field on every validation call and
/// dropped once the field's rule chain finishes.
#[derive(Debug)]
pub struct FieldContext<'a> {
    field: &'a FieldDefinition,
    value: Value,
    messages: Vec<String>,
}

impl<'a> FieldContext<'a> {
    pub fn new(field: &'a FieldDefinition, value: Value) -> Self {
        Self {
            field,
            value,
            messages: Vec::new(),
        }
    }

    /// Field whose rules are running.
    pub fn field(&self) -> &'a FieldDefinition {
        self.field
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the working value.
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// Take the working value, leaving `null` behind.
    pub fn take_value(&mut self) -> Value {
        self.value.take()
    }

    /// Record a failure message for this field.
    pub fn message(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_parts(self) -> (Value, Vec<String>) {
        (self.value, self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field;
    use serde_json::json;

    #[test]
    fn context_starts_without_messages() {
        let definition = field("name");
        let ctx = FieldContext::new(&definition, json!("value"));

        assert_eq!(ctx.field().name(), "name");
        assert_eq!(ctx.value(), &json!("value"));
        assert!(ctx.messages().is_empty());
    }

    #[test]
    fn context_collects_messages_in_order() {
        let definition = field("name");
        let mut ctx = FieldContext::new(&definition, Value::Null);

        ctx.message("first");
        ctx.message(String::from("second"));

        assert_eq!(ctx.messages(), ["first", "second"]);
    }

    #[test]
    fn value_can_be_replaced_and_taken() {
        let definition = field("name");
        let mut ctx = FieldContext::new(&definition, json!(1));

        ctx.set_value(json!(2));
        assert_eq!(ctx.take_value(), json!(2));
        assert_eq!(ctx.value(), &Value::Null);

        ctx.set_value(json!("done"));
        let (value, messages) = ctx.into_parts();
        assert_eq!(value, json!("done"));
        assert!(messages.is_empty());
    }
}
