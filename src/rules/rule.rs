//! Rule kinds and their typed configuration.

use crate::binding::FieldContext;
use crate::core::value;
use crate::rules::email::{EmailSyntax, StandardEmail};
use crate::rules::message::{resolve_or, Message};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Caller-supplied check over the working value.
pub type CheckFn = Arc<dyn Fn(&Value) -> Validation<(), NonEmptyVec<String>> + Send + Sync>;

/// Caller-supplied rewrite of the working value.
pub type TransformFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Rejects `null` and the empty string.
#[derive(Clone, Debug, Default)]
pub struct NotEmpty {
    pub message: Option<Message>,
}

impl NotEmpty {
    pub const DEFAULT_MESSAGE: &'static str = "Field cannot be empty";

    /// `"0"` is not empty; only the exact empty string is.
    pub fn passes(&self, value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    fn fail_message(&self) -> String {
        resolve_or(self.message.as_ref(), || Self::DEFAULT_MESSAGE.to_string())
    }
}

/// Rejects strings longer than `size` characters. Non-strings pass.
#[derive(Clone, Debug)]
pub struct MaxLength {
    pub size: usize,
    pub message: Option<Message>,
}

impl MaxLength {
    pub fn passes(&self, value: &Value) -> bool {
        value::char_len(value).map_or(true, |len| len <= self.size)
    }

    fn fail_message(&self) -> String {
        resolve_or(self.message.as_ref(), || {
            format!("Field value is too long (limit {})", self.size)
        })
    }
}

/// Rejects strings shorter than `size` characters. Non-strings pass.
#[derive(Clone, Debug)]
pub struct MinLength {
    pub size: usize,
    pub message: Option<Message>,
}

impl MinLength {
    pub fn passes(&self, value: &Value) -> bool {
        value::char_len(value).map_or(true, |len| len >= self.size)
    }

    fn fail_message(&self) -> String {
        resolve_or(self.message.as_ref(), || {
            format!("Field value is too short (limit {})", self.size)
        })
    }
}

/// Requires a well-formed email address when a value is present.
///
/// `null` and `""` pass; pair with [`NotEmpty`] for a required address.
#[derive(Clone)]
pub struct Email {
    pub message: Option<Message>,
    syntax: Arc<dyn EmailSyntax>,
}

impl Email {
    pub const DEFAULT_MESSAGE: &'static str = "Invalid email address";

    pub fn new(message: Option<Message>) -> Self {
        Self::with_syntax(StandardEmail, message)
    }

    /// Use a custom syntax checker instead of [`StandardEmail`].
    pub fn with_syntax<E>(syntax: E, message: Option<Message>) -> Self
    where
        E: EmailSyntax + 'static,
    {
        Self {
            message,
            syntax: Arc::new(syntax),
        }
    }

    pub fn passes(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) if s.is_empty() => true,
            Value::String(s) => self.syntax.is_valid(s),
            _ => false,
        }
    }

    fn fail_message(&self) -> String {
        resolve_or(self.message.as_ref(), || Self::DEFAULT_MESSAGE.to_string())
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Email")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// One configured step of a field's rule chain.
#[derive(Clone)]
pub enum Rule {
    NotEmpty(NotEmpty),
    MaxLength(MaxLength),
    MinLength(MinLength),
    Email(Email),
    /// Custom check; every reported message is recorded on failure
    Check(CheckFn),
    /// Rewrites the working value, never fails
    Transform(TransformFn),
    /// Trims a string working value, never fails
    Trim,
}

impl Rule {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::NotEmpty(_) => "not_empty",
            Rule::MaxLength(_) => "max_length",
            Rule::MinLength(_) => "min_length",
            Rule::Email(_) => "email",
            Rule::Check(_) => "check",
            Rule::Transform(_) => "transform",
            Rule::Trim => "trim",
        }
    }

    /// Run the rule against a field context.
    ///
    /// Returns `false` when the rule failed; its message(s) are already
    /// recorded on the context by then.
    pub fn apply(&self, ctx: &mut FieldContext<'_>) -> bool {
        let failure = match self {
            Rule::NotEmpty(rule) => (!rule.passes(ctx.value())).then(|| rule.fail_message()),
            Rule::MaxLength(rule) => (!rule.passes(ctx.value())).then(|| rule.fail_message()),
            Rule::MinLength(rule) => (!rule.passes(ctx.value())).then(|| rule.fail_message()),
            Rule::Email(rule) => (!rule.passes(ctx.value())).then(|| rule.fail_message()),
            Rule::Check(check) => {
                return match check(ctx.value()) {
                    Validation::Success(_) => true,
                    Validation::Failure(errors) => {
                        for error in errors.iter() {
                            ctx.message(error.clone());
                        }
                        false
                    }
                };
            }
            Rule::Transform(transform) => {
                let current = ctx.take_value();
                ctx.set_value(transform(current));
                None
            }
            Rule::Trim => {
                let current = ctx.take_value();
                ctx.set_value(value::trim(current));
                None
            }
        };

        match failure {
            Some(text) => {
                ctx.message(text);
                false
            }
            None => true,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NotEmpty(rule) => f.debug_tuple("NotEmpty").field(rule).finish(),
            Rule::MaxLength(rule) => f.debug_tuple("MaxLength").field(rule).finish(),
            Rule::MinLength(rule) => f.debug_tuple("MinLength").field(rule).finish(),
            Rule::Email(rule) => f.debug_tuple("Email").field(rule).finish(),
            Rule::Check(_) => f.write_str("Check(..)"),
            Rule::Transform(_) => f.write_str("Transform(..)"),
            Rule::Trim => f.write_str("Trim"),
        }
    }
}

impl From<NotEmpty> for Rule {
    fn from(rule: NotEmpty) -> Self {
        Rule::NotEmpty(rule)
    }
}

impl From<MaxLength> for Rule {
    fn from(rule: MaxLength) -> Self {
        Rule::MaxLength(rule)
    }
}

impl From<MinLength> for Rule {
    fn from(rule: MinLength) -> Self {
        Rule::MinLength(rule)
    }
}

impl From<Email> for Rule {
    fn from(rule: Email) -> Self {
        Rule::Email(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn run(rule: &Rule, value: Value) -> (bool, Vec<String>) {
        let definition = field("test");
        let mut ctx = FieldContext::new(&definition, value);
        let passed = rule.apply(&mut ctx);
        let (_, messages) = ctx.into_parts();
        (passed, messages)
    }

    #[test]
    fn not_empty_rejects_null_and_empty_string() {
        let rule = Rule::from(NotEmpty::default());

        assert_eq!(
            run(&rule, Value::Null),
            (false, vec!["Field cannot be empty".to_string()])
        );
        assert_eq!(
            run(&rule, json!("")),
            (false, vec!["Field cannot be empty".to_string()])
        );
    }

    #[test]
    fn not_empty_accepts_zero_string_and_non_strings() {
        let rule = Rule::from(NotEmpty::default());

        assert_eq!(run(&rule, json!("0")), (true, vec![]));
        assert_eq!(run(&rule, json!(" ")), (true, vec![]));
        assert_eq!(run(&rule, json!(0)), (true, vec![]));
        assert_eq!(run(&rule, json!(false)), (true, vec![]));
    }

    #[test]
    fn not_empty_uses_custom_and_lazy_messages() {
        let custom = Rule::from(NotEmpty {
            message: Some("ERR".into()),
        });
        assert_eq!(run(&custom, json!("")), (false, vec!["ERR".to_string()]));

        let lazy = Rule::from(NotEmpty {
            message: Some(Message::lazy(|| "ERR".to_string())),
        });
        assert_eq!(run(&lazy, json!("")), (false, vec!["ERR".to_string()]));
    }

    #[test]
    fn lazy_message_not_produced_when_rule_passes() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();
        let rule = Rule::from(NotEmpty {
            message: Some(Message::lazy(move || {
                flag.store(true, Ordering::SeqCst);
                "ERR".to_string()
            })),
        });

        assert_eq!(run(&rule, json!("present")), (true, vec![]));
        assert!(!called.load(Ordering::SeqCst));
    }

    #[test]
    fn max_length_limits_strings_only() {
        let rule = Rule::from(MaxLength {
            size: 4,
            message: None,
        });

        assert!(run(&rule, json!("foo")).0);
        assert!(run(&rule, json!("foo ")).0);
        assert!(run(&rule, json!("")).0);
        assert!(run(&rule, json!(123456789)).0);
        assert!(run(&rule, json!(true)).0);
        assert!(run(&rule, Value::Null).0);
        assert_eq!(
            run(&rule, json!("too long")),
            (false, vec!["Field value is too long (limit 4)".to_string()])
        );
    }

    #[test]
    fn min_length_limits_strings_only() {
        let rule = Rule::from(MinLength {
            size: 4,
            message: None,
        });

        assert!(run(&rule, json!("long value")).0);
        assert!(run(&rule, json!("four")).0);
        assert!(run(&rule, json!(1)).0);
        assert!(run(&rule, Value::Null).0);
        assert_eq!(
            run(&rule, json!("foo")),
            (false, vec!["Field value is too short (limit 4)".to_string()])
        );
        assert!(!run(&rule, json!("")).0);
    }

    #[test]
    fn min_length_zero_accepts_empty_string() {
        let rule = Rule::from(MinLength {
            size: 0,
            message: None,
        });
        assert!(run(&rule, json!("")).0);
    }

    #[test]
    fn min_length_with_zero_string() {
        let one = Rule::from(MinLength {
            size: 1,
            message: None,
        });
        let two = Rule::from(MinLength {
            size: 2,
            message: None,
        });

        assert!(run(&one, json!("0")).0);
        assert!(!run(&two, json!("0")).0);
    }

    #[test]
    fn email_ignores_absent_values() {
        let rule = Rule::from(Email::default());

        assert!(run(&rule, Value::Null).0);
        assert!(run(&rule, json!("")).0);
    }

    #[test]
    fn email_checks_syntax() {
        let rule = Rule::from(Email::default());

        assert!(run(&rule, json!("foo@bar.pl")).0);
        assert_eq!(
            run(&rule, json!("foo")),
            (false, vec!["Invalid email address".to_string()])
        );
        assert!(!run(&rule, json!(42)).0);
    }

    #[test]
    fn email_accepts_custom_syntax() {
        let rule = Rule::from(Email::with_syntax(
            |address: &str| address.contains('#'),
            Some("ERR".into()),
        ));

        assert!(run(&rule, json!("a#b")).0);
        assert_eq!(run(&rule, json!("foo@bar.pl")), (false, vec!["ERR".to_string()]));
    }

    #[test]
    fn check_records_every_reported_message() {
        let rule = Rule::Check(Arc::new(|value: &Value| {
            if value.is_number() {
                Validation::success(())
            } else {
                Validation::Failure(NonEmptyVec::new(
                    "not a number".to_string(),
                    vec!["really not".to_string()],
                ))
            }
        }));

        assert_eq!(run(&rule, json!(5)), (true, vec![]));
        assert_eq!(
            run(&rule, json!("five")),
            (
                false,
                vec!["not a number".to_string(), "really not".to_string()]
            )
        );
    }

    #[test]
    fn transform_and_trim_rewrite_the_value() {
        let definition = field("test");

        let mut ctx = FieldContext::new(&definition, json!("  padded  "));
        assert!(Rule::Trim.apply(&mut ctx));
        assert_eq!(ctx.value(), &json!("padded"));

        let upper = Rule::Transform(Arc::new(|value: Value| match value {
            Value::String(s) => Value::String(s.to_uppercase()),
            other => other,
        }));
        assert!(upper.apply(&mut ctx));
        assert_eq!(ctx.value(), &json!("PADDED"));
        assert!(ctx.messages().is_empty());
    }

    #[test]
    fn rule_names_are_stable() {
        assert_eq!(Rule::from(NotEmpty::default()).name(), "not_empty");
        assert_eq!(Rule::from(Email::default()).name(), "email");
        assert_eq!(Rule::Trim.name(), "trim");
    }
}
