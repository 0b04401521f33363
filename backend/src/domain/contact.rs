//! Contact submission model and its validation rules.
//!
//! A [`ContactDraft`] holds untrusted form values exactly as received. The
//! only way to obtain a [`ContactSubmission`] is [`ContactDraft::validate`],
//! which trims every field and evaluates every rule, so a submission value is
//! proof that all rules passed.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Maximum length of the sender's name, counted in characters.
pub const NAME_MAX_CHARS: usize = 100;
/// Maximum length of the sender's email address, counted in characters.
pub const EMAIL_MAX_CHARS: usize = 255;
/// Maximum length of the message body, counted in characters.
pub const MESSAGE_MAX_CHARS: usize = 2000;

/// Raised when a category or priority string is outside its fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised {field} value")]
pub struct UnknownChoice {
    /// Field the value was supplied for.
    pub field: ContactField,
}

/// Form fields that make up a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Topic of the enquiry.
    Category,
    /// Urgency chosen by the sender.
    Priority,
    /// Free-text message.
    Message,
}

impl ContactField {
    /// Wire name of the form field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Category => "category",
            Self::Priority => "priority",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topic of a contact request. `Unspecified` is the empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactCategory {
    /// No category chosen (empty string on the wire).
    #[default]
    Unspecified,
    /// Battery drain or charging problems.
    Battery,
    /// Slowness or lag.
    Performance,
    /// Screen issues.
    Display,
    /// Device running hot.
    Overheating,
    /// Operating system or app problems.
    Software,
    /// Physical damage or faulty parts.
    Hardware,
    /// Anything else.
    Other,
}

impl ContactCategory {
    /// Every accepted category in wire order.
    pub const ALL: [Self; 8] = [
        Self::Unspecified,
        Self::Battery,
        Self::Performance,
        Self::Display,
        Self::Overheating,
        Self::Software,
        Self::Hardware,
        Self::Other,
    ];

    /// Wire spelling stored in the `category` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Battery => "battery",
            Self::Performance => "performance",
            Self::Display => "display",
            Self::Overheating => "overheating",
            Self::Software => "software",
            Self::Hardware => "hardware",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactCategory {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(UnknownChoice {
                field: ContactField::Category,
            })
    }
}

/// Urgency chosen by the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactPriority {
    /// No rush.
    Low,
    /// Normal handling.
    Medium,
    /// Needs attention soon.
    High,
}

impl ContactPriority {
    /// Every accepted priority.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire spelling stored in the `priority` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ContactPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactPriority {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or(UnknownChoice {
                field: ContactField::Priority,
            })
    }
}

/// A single broken validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactViolation {
    /// Name is empty after trimming.
    NameRequired,
    /// Name exceeds [`NAME_MAX_CHARS`].
    NameTooLong,
    /// Email is empty after trimming.
    EmailRequired,
    /// Email does not look like an address.
    EmailInvalid,
    /// Email exceeds [`EMAIL_MAX_CHARS`].
    EmailTooLong,
    /// Category is outside the fixed set.
    CategoryUnknown,
    /// Priority is outside the fixed set.
    PriorityUnknown,
    /// Message is empty after trimming.
    MessageRequired,
    /// Message exceeds [`MESSAGE_MAX_CHARS`].
    MessageTooLong,
}

impl ContactViolation {
    /// Field the rule belongs to.
    #[must_use]
    pub const fn field(self) -> ContactField {
        match self {
            Self::NameRequired | Self::NameTooLong => ContactField::Name,
            Self::EmailRequired | Self::EmailInvalid | Self::EmailTooLong => ContactField::Email,
            Self::CategoryUnknown => ContactField::Category,
            Self::PriorityUnknown => ContactField::Priority,
            Self::MessageRequired | Self::MessageTooLong => ContactField::Message,
        }
    }

    /// Stable code for logs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NameRequired => "name_required",
            Self::NameTooLong => "name_too_long",
            Self::EmailRequired => "email_required",
            Self::EmailInvalid => "email_invalid",
            Self::EmailTooLong => "email_too_long",
            Self::CategoryUnknown => "category_unknown",
            Self::PriorityUnknown => "priority_unknown",
            Self::MessageRequired => "message_required",
            Self::MessageTooLong => "message_too_long",
        }
    }
}

impl fmt::Display for ContactViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => f.write_str("Name is required."),
            Self::NameTooLong => write!(f, "Name must be at most {NAME_MAX_CHARS} characters."),
            Self::EmailRequired => f.write_str("Email is required."),
            Self::EmailInvalid => f.write_str("Email must be a valid email address."),
            Self::EmailTooLong => {
                write!(f, "Email must be at most {EMAIL_MAX_CHARS} characters.")
            }
            Self::CategoryUnknown => f.write_str(
                "Category must be one of: battery, performance, display, overheating, \
                 software, hardware, other.",
            ),
            Self::PriorityUnknown => f.write_str("Priority must be one of: low, medium, high."),
            Self::MessageRequired => f.write_str("Message is required."),
            Self::MessageTooLong => {
                write!(f, "Message must be at most {MESSAGE_MAX_CHARS} characters.")
            }
        }
    }
}

/// Every rule a draft broke, in field order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidationError {
    violations: Vec<ContactViolation>,
}

impl ContactValidationError {
    /// The broken rules, at most one per field.
    #[must_use]
    pub fn violations(&self) -> &[ContactViolation] {
        &self.violations
    }
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.violations.iter();
        if let Some(first) = lines.next() {
            write!(f, "{first}")?;
        }
        for violation in lines {
            write!(f, "\n{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ContactValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Dot placement in the local part is checked separately.
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email syntax check applied by the server.
///
/// Stricter than the browser-side shape check: the local part uses the
/// RFC 5322 atom characters without leading, trailing, or doubled dots, and
/// the domain needs at least two well-formed labels.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if !email_regex().is_match(email) {
        return false;
    }
    let Some((local, _domain)) = email.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
}

fn exceeds(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

fn check_name(name: &str) -> Option<ContactViolation> {
    if name.is_empty() {
        Some(ContactViolation::NameRequired)
    } else if exceeds(name, NAME_MAX_CHARS) {
        Some(ContactViolation::NameTooLong)
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<ContactViolation> {
    if email.is_empty() {
        Some(ContactViolation::EmailRequired)
    } else if !is_valid_email(email) {
        Some(ContactViolation::EmailInvalid)
    } else if exceeds(email, EMAIL_MAX_CHARS) {
        Some(ContactViolation::EmailTooLong)
    } else {
        None
    }
}

fn check_message(message: &str) -> Option<ContactViolation> {
    if message.is_empty() {
        Some(ContactViolation::MessageRequired)
    } else if exceeds(message, MESSAGE_MAX_CHARS) {
        Some(ContactViolation::MessageTooLong)
    } else {
        None
    }
}

/// Untrusted form values as received. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Category wire value.
    pub category: String,
    /// Priority wire value.
    pub priority: String,
    /// Free-text message.
    pub message: String,
}

impl ContactDraft {
    /// Trim every field and check every rule.
    ///
    /// All fields are evaluated even after a failure so the caller can report
    /// every problem at once. Within a field the first failing rule wins.
    ///
    /// # Errors
    /// Returns [`ContactValidationError`] listing each broken rule.
    ///
    /// # Examples
    /// ```
    /// use contact_backend::domain::{ContactDraft, ContactPriority};
    ///
    /// let draft = ContactDraft {
    ///     name: "  Jane Doe ".into(),
    ///     email: "jane@example.com".into(),
    ///     category: "battery".into(),
    ///     priority: "high".into(),
    ///     message: "Phone won't charge".into(),
    /// };
    /// let submission = draft.validate().expect("valid draft");
    /// assert_eq!(submission.name(), "Jane Doe");
    /// assert_eq!(submission.priority(), ContactPriority::High);
    /// ```
    pub fn validate(&self) -> Result<ContactSubmission, ContactValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        let category = self.category.trim().parse::<ContactCategory>();
        let priority = self.priority.trim().parse::<ContactPriority>();

        let violations: Vec<ContactViolation> = [
            check_name(name),
            check_email(email),
            category.is_err().then_some(ContactViolation::CategoryUnknown),
            priority.is_err().then_some(ContactViolation::PriorityUnknown),
            check_message(message),
        ]
        .into_iter()
        .flatten()
        .collect();

        match (category, priority) {
            (Ok(category), Ok(priority)) if violations.is_empty() => Ok(ContactSubmission {
                name: name.to_owned(),
                email: email.to_owned(),
                category,
                priority,
                message: message.to_owned(),
            }),
            _ => Err(ContactValidationError { violations }),
        }
    }
}

/// A submission that passed every rule. Fields are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    category: ContactCategory,
    priority: ContactPriority,
    message: String,
}

impl ContactSubmission {
    /// Sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Chosen category.
    #[must_use]
    pub const fn category(&self) -> ContactCategory {
        self.category
    }

    /// Chosen priority.
    #[must_use]
    pub const fn priority(&self) -> ContactPriority {
        self.priority
    }

    /// Message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Row identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(i64);

impl ContactId {
    /// Wrap a raw row id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated submission stamped with the server-side creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// Validated field values.
    pub submission: ContactSubmission,
    /// Server clock reading taken just before insertion.
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement returned once a row has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredContact {
    /// Identifier of the new row.
    pub id: ContactId,
    /// Timestamp persisted with the row.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
