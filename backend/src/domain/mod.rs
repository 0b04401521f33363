//! Domain primitives, services, and ports.
//!
//! Purpose: hold the contact submission rules independently of HTTP and SQL.
//! Inbound adapters call [`ports::ContactSubmissionCommand`]; outbound
//! adapters implement [`ports::ContactRepository`].
//!
//! Public surface:
//! - `ContactDraft` / `ContactSubmission`: untrusted input and its validated form.
//! - `ContactSubmissionService`: validate, timestamp, persist.
//! - `Error` / `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod contact;
pub mod contact_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::contact::{
    ContactCategory, ContactDraft, ContactField, ContactId, ContactPriority, ContactSubmission,
    ContactValidationError, ContactViolation, EMAIL_MAX_CHARS, MESSAGE_MAX_CHARS, NAME_MAX_CHARS,
    NewContact, StoredContact, UnknownChoice, is_valid_email,
};
pub use self::contact_service::ContactSubmissionService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
