//! The submission agent: pre-validate, POST as multipart, report.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use mockable::{Clock, DefaultClock};
use reqwest::multipart::Form;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::form::{ContactForm, FormRejection};
use crate::notification::{Notification, NotificationKind, NotificationSlot};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Shown on success when the server sends no body.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Shown on a non-2xx response with an empty body.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when no response arrives.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the server. Please check your connection and try again.";

/// Agent settings.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    endpoint: Url,
    request_timeout: Duration,
    display_duration: Duration,
}

impl AgentConfig {
    /// Settings for `endpoint` with a 10 second request timeout and a
    /// 5 second notification display.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidEndpoint`] unless `endpoint` is an
    /// absolute `http` or `https` URL.
    pub fn new(endpoint: &str) -> Result<Self, AgentError> {
        let invalid = |message: String| AgentError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            message,
        };
        let url = Url::parse(endpoint).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        Ok(Self {
            endpoint: url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            display_duration: DEFAULT_DISPLAY_DURATION,
        })
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override how long notifications stay visible.
    #[must_use]
    pub const fn with_display_duration(mut self, duration: Duration) -> Self {
        self.display_duration = duration;
        self
    }

    /// The submission endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// What happened to a call to [`ContactAgent::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server accepted the submission; the form was reset.
    Delivered,
    /// Pre-validation stopped the submission; nothing was sent.
    Invalid(FormRejection),
    /// The server answered with a non-2xx status.
    Rejected {
        /// HTTP status code returned by the server.
        status: u16,
    },
    /// No response arrived.
    NetworkFailure,
    /// Another submission from this agent is still in flight.
    Busy,
}

/// Clears the in-flight flag on every exit path.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Client-side contact form agent.
///
/// Holds the form values and the notification banner, and submits at most
/// one request at a time.
///
/// # Examples
/// ```no_run
/// use contact_agent::{AgentConfig, ContactAgent, ContactForm, SubmissionOutcome};
///
/// # async fn demo() -> Result<(), contact_agent::AgentError> {
/// let agent = ContactAgent::new(AgentConfig::new("http://localhost:8080/api/v1/contact")?)?;
/// agent.fill(ContactForm {
///     name: "Jane Doe".to_owned(),
///     email: "jane@example.com".to_owned(),
///     message: "Phone won't charge".to_owned(),
///     priority: "high".to_owned(),
///     ..ContactForm::default()
/// });
/// if agent.submit().await == SubmissionOutcome::Delivered {
///     assert!(agent.form().name.is_empty());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ContactAgent {
    client: Client,
    endpoint: Url,
    form: Mutex<ContactForm>,
    notifications: NotificationSlot,
    in_flight: AtomicBool,
}

impl ContactAgent {
    /// Build an agent using the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        Self::with_clock(config, Arc::new(DefaultClock))
    }

    /// Build an agent whose notification expiry follows `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn with_clock(config: AgentConfig, clock: Arc<dyn Clock>) -> Result<Self, AgentError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| AgentError::ClientBuild {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
            form: Mutex::new(ContactForm::default()),
            notifications: NotificationSlot::new(config.display_duration, clock),
            in_flight: AtomicBool::new(false),
        })
    }

    fn form_guard(&self) -> MutexGuard<'_, ContactForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the form values.
    pub fn fill(&self, form: ContactForm) {
        *self.form_guard() = form;
    }

    /// Snapshot of the current form values.
    #[must_use]
    pub fn form(&self) -> ContactForm {
        self.form_guard().clone()
    }

    /// The visible notification, if any.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    /// Hide the visible notification.
    pub fn dismiss_notification(&self) {
        self.notifications.dismiss();
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate and submit the current form.
    ///
    /// Sends nothing when pre-validation fails or another submission is in
    /// flight. The outcome is also reflected in [`Self::notification`].
    pub async fn submit(&self) -> SubmissionOutcome {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            debug!("submission ignored while another is in flight");
            return SubmissionOutcome::Busy;
        };

        let form = self.form();
        if let Err(rejection) = form.prevalidate() {
            debug!(?rejection, "form stopped before submission");
            self.notifications
                .show(NotificationKind::Error, rejection.message());
            return SubmissionOutcome::Invalid(rejection);
        }

        let response = match self
            .client
            .post(self.endpoint.clone())
            .multipart(multipart_body(form))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, endpoint = %self.endpoint, "contact submission did not reach the server");
                self.notifications
                    .show(NotificationKind::NetworkError, NETWORK_ERROR_MESSAGE);
                return SubmissionOutcome::NetworkFailure;
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, %status, "failed to read contact response body");
                String::new()
            }
        };
        let text = body.trim();

        if status.is_success() {
            self.form_guard().reset();
            self.notifications.show(
                NotificationKind::Success,
                non_empty_or(text, DEFAULT_SUCCESS_MESSAGE),
            );
            SubmissionOutcome::Delivered
        } else {
            debug!(%status, "contact submission rejected by server");
            self.notifications.show(
                NotificationKind::Error,
                non_empty_or(text, DEFAULT_REJECTION_MESSAGE),
            );
            SubmissionOutcome::Rejected {
                status: status.as_u16(),
            }
        }
    }
}

const fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() { fallback } else { text }
}

fn multipart_body(form: ContactForm) -> Form {
    let ContactForm {
        name,
        email,
        category,
        message,
        priority,
    } = form;
    Form::new()
        .text("name", name)
        .text("email", email)
        .text("category", category)
        .text("message", message)
        .text("priority", priority)
}
