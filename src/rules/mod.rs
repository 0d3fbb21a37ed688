//! Validation rules.
//!
//! Each rule kind carries its own typed configuration and checks the working
//! value of one field. A failing rule records its message on the
//! [`FieldContext`](crate::binding::FieldContext) and stops the field's chain.
//!
//! Built-in kinds: [`NotEmpty`], [`MaxLength`], [`MinLength`] and [`Email`].
//! Custom checks use stillwater's `Validation` so one check can report
//! several messages at once.

mod email;
mod message;
mod rule;

pub use email::{EmailSyntax, StandardEmail};
pub use message::{Message, MessageFn};
pub use rule::{CheckFn, Email, MaxLength, MinLength, NotEmpty, Rule, TransformFn};
