//! Message sources for rule failures.

use std::fmt;
use std::sync::Arc;

/// Text producer invoked when a rule fails.
pub type MessageFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Where a failing rule gets its message from.
///
/// A `Text` message is fixed when the field is declared. A `Lazy` message is
/// produced only when the rule actually fails, so text computed at runtime
/// does not have to be rendered up front.
///
/// # Example
///
/// ```rust
/// use formcheck::rules::Message;
///
/// let fixed = Message::from("Name is required");
/// assert_eq!(fixed.resolve(), "Name is required");
///
/// let lazy = Message::lazy(|| format!("Pick at most {} tags", 3));
/// assert_eq!(lazy.resolve(), "Pick at most 3 tags");
/// ```
#[derive(Clone)]
pub enum Message {
    /// Literal message text
    Text(String),
    /// Zero-argument producer called at failure time
    Lazy(MessageFn),
}

impl Message {
    /// Build a message whose text is produced when the rule fails.
    pub fn lazy<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Message::Lazy(Arc::new(producer))
    }

    /// Produce the message text.
    pub fn resolve(&self) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Lazy(producer) => producer(),
        }
    }
}

/// Resolve an optional custom message, falling back to the rule's default.
pub(crate) fn resolve_or(message: Option<&Message>, default: impl FnOnce() -> String) -> String {
    match message {
        Some(message) => message.resolve(),
        None => default(),
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Message::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}
