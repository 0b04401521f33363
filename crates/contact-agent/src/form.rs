//! Form state and client-side pre-validation.
//!
//! The checks here are deliberately loose: they catch empty fields and
//! obviously malformed addresses before a round trip. The server applies the
//! authoritative rules.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Shown when name, email, or message is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Shown when the email address fails the structural check.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Values currently entered in the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Optional topic; passed through unchecked.
    pub category: String,
    /// Message body.
    pub message: String,
    /// Requested urgency; passed through unchecked.
    pub priority: String,
}

/// Reason a form was stopped before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRejection {
    /// Name, email, or message is blank.
    MissingRequired,
    /// The email address is structurally invalid.
    InvalidEmail,
}

impl FormRejection {
    /// User-facing text for the rejection.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingRequired => MISSING_FIELDS_MESSAGE,
            Self::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}

impl fmt::Display for FormRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Structural email check: something, `@`, something, `.`, something, with
/// no whitespace and exactly one `@`.
///
/// # Examples
/// ```
/// use contact_agent::is_plausible_email;
///
/// assert!(is_plausible_email("jane@example.com"));
/// assert!(!is_plausible_email("jane@example"));
/// ```
#[must_use]
pub fn is_plausible_email(candidate: &str) -> bool {
    email_regex().is_match(candidate)
}

impl ContactForm {
    /// Check required fields and email shape.
    ///
    /// Missing fields are reported before a malformed email.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormRejection`] that applies.
    pub fn prevalidate(&self) -> Result<(), FormRejection> {
        let required = [&self.name, &self.email, &self.message];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(FormRejection::MissingRequired);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(FormRejection::InvalidEmail);
        }
        Ok(())
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
