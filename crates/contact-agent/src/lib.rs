//! Client-side contact form agent.
//!
//! Mirrors what a browser form does: checks that the required fields are
//! present and that the email looks plausible, posts the form as
//! `multipart/form-data`, and reports the result through a single
//! auto-dismissing notification.
//!
//! # Example
//!
//! ```no_run
//! use contact_agent::{AgentConfig, ContactAgent, ContactForm};
//!
//! # async fn demo() -> Result<(), contact_agent::AgentError> {
//! let agent = ContactAgent::new(AgentConfig::new("http://localhost:8080/api/v1/contact")?)?;
//! agent.fill(ContactForm {
//!     name: "Jane Doe".to_owned(),
//!     email: "jane@example.com".to_owned(),
//!     message: "Hello".to_owned(),
//!     priority: "medium".to_owned(),
//!     ..ContactForm::default()
//! });
//! let outcome = agent.submit().await;
//! println!("{outcome:?}: {:?}", agent.notification());
//! # Ok(())
//! # }
//! ```

mod agent;
mod error;
mod form;
mod notification;

pub use agent::{
    AgentConfig, ContactAgent, DEFAULT_REJECTION_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
    NETWORK_ERROR_MESSAGE, SubmissionOutcome,
};
pub use error::AgentError;
pub use form::{
    ContactForm, FormRejection, INVALID_EMAIL_MESSAGE, MISSING_FIELDS_MESSAGE, is_plausible_email,
};
pub use notification::{Notification, NotificationKind, NotificationSlot};
