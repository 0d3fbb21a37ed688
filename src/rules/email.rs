//! Email syntax checking.

use validator::ValidateEmail;

/// Decides whether a string is a syntactically valid email address.
///
/// The `email` rule delegates to an implementation of this trait. The
/// default, [`StandardEmail`], uses the `validator` crate; callers can plug
/// in anything else that fits their notion of an address.
///
/// # Example
///
/// ```rust
/// use formcheck::rules::EmailSyntax;
///
/// struct CompanyOnly;
///
/// impl EmailSyntax for CompanyOnly {
///     fn is_valid(&self, address: &str) -> bool {
///         address.ends_with("@example.com")
///     }
/// }
///
/// assert!(CompanyOnly.is_valid("ops@example.com"));
/// assert!(!CompanyOnly.is_valid("ops@elsewhere.org"));
/// ```
pub trait EmailSyntax: Send + Sync {
    fn is_valid(&self, address: &str) -> bool;
}

/// Email syntax check backed by `validator::ValidateEmail`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardEmail;

impl EmailSyntax for StandardEmail {
    fn is_valid(&self, address: &str) -> bool {
        address.validate_email()
    }
}

impl<F> EmailSyntax for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, address: &str) -> bool {
        self(address)
    }
}
