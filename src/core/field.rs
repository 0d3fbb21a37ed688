//! Field definitions and their fluent builder API.

use crate::rules::{Email, EmailSyntax, MaxLength, Message, MinLength, NotEmpty, Rule};
use serde_json::Value;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Static declaration of one form field.
///
/// A field has a name, a default value, a trimming policy, a checkbox flag
/// and an ordered chain of rules. Every builder method consumes and returns
/// the definition so fields can be declared in one expression.
///
/// # Example
///
/// ```rust
/// use formcheck::core::field;
///
/// let email = field("email")
///     .not_empty()
///     .max_length(254)
///     .email_with("Please enter a valid address");
///
/// assert_eq!(email.name(), "email");
/// assert_eq!(email.rules().len(), 3);
/// assert!(email.trims());
/// ```
///
/// Cloning a definition shares its lazy messages and custom closures. A
/// definition is meant to belong to a single form; reusing one across forms
/// works but is the caller's business.
#[derive(Clone, Debug)]
pub struct FieldDefinition {
    name: String,
    default_value: Value,
    trim: bool,
    is_checkbox: bool,
    rules: Vec<Rule>,
}

/// Start a field definition with no default value.
pub fn field(name: impl Into<String>) -> FieldDefinition {
    FieldDefinition::new(name)
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_default(name, Value::Null)
    }

    /// Start a field definition with a default value.
    pub fn with_default(name: impl Into<String>, default_value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default_value: default_value.into(),
            trim: true,
            is_checkbox: false,
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// Whether string values are trimmed before the rules run.
    pub fn trims(&self) -> bool {
        self.trim && !self.is_checkbox
    }

    pub fn is_checkbox(&self) -> bool {
        self.is_checkbox
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Replace the default value.
    pub fn defaults_to(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Treat the field as an HTML checkbox.
    ///
    /// A missing checkbox input reads as unchecked, and any supplied value is
    /// coerced to a boolean.
    pub fn checkbox(mut self) -> Self {
        self.is_checkbox = true;
        self
    }

    /// Keep surrounding whitespace of string values.
    pub fn no_trim(mut self) -> Self {
        self.trim = false;
        self
    }

    /// Append a pre-built rule.
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    pub fn not_empty(self) -> Self {
        self.rule(NotEmpty { message: None })
    }

    pub fn not_empty_with(self, message: impl Into<Message>) -> Self {
        self.rule(NotEmpty {
            message: Some(message.into()),
        })
    }

    pub fn max_length(self, size: usize) -> Self {
        self.rule(MaxLength {
            size,
            message: None,
        })
    }

    pub fn max_length_with(self, size: usize, message: impl Into<Message>) -> Self {
        self.rule(MaxLength {
            size,
            message: Some(message.into()),
        })
    }

    pub fn min_length(self, size: usize) -> Self {
        self.rule(MinLength {
            size,
            message: None,
        })
    }

    pub fn min_length_with(self, size: usize, message: impl Into<Message>) -> Self {
        self.rule(MinLength {
            size,
            message: Some(message.into()),
        })
    }

    pub fn email(self) -> Self {
        self.rule(Email::new(None))
    }

    pub fn email_with(self, message: impl Into<Message>) -> Self {
        self.rule(Email::new(Some(message.into())))
    }

    /// Email rule backed by a caller-supplied syntax checker.
    pub fn email_using<E>(self, syntax: E, message: Option<Message>) -> Self
    where
        E: EmailSyntax + 'static,
    {
        self.rule(Email::with_syntax(syntax, message))
    }

    /// Add a custom check over the working value.
    ///
    /// Every message in a failed `Validation` is recorded for the field.
    pub fn check<F>(self, check: F) -> Self
    where
        F: Fn(&Value) -> Validation<(), NonEmptyVec<String>> + Send + Sync + 'static,
    {
        self.rule(Rule::Check(Arc::new(check)))
    }

    /// Add a simple predicate check with a failure message
    pub fn check_pred<F>(self, predicate: F, message: impl Into<Message>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.check(move |value: &Value| {
            if predicate(value) {
                Validation::success(())
            } else {
                Validation::fail(message.resolve())
            }
        })
    }

    /// Rewrite the working value at this point of the chain.
    pub fn transform<F>(self, transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.rule(Rule::Transform(Arc::new(transform)))
    }

    /// Trim a string working value at this point of the chain.
    pub fn trimmed(self) -> Self {
        self.rule(Rule::Trim)
    }
}
