//! Contact submission service.
//!
//! Implements [`ContactSubmissionCommand`]: validate, stamp with the server
//! clock, persist. Store failures are logged here with full detail and
//! surfaced as internal errors; the HTTP adapter redacts them.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error, info};

use crate::domain::ports::{ContactRepository, ContactRepositoryError, ContactSubmissionCommand};
use crate::domain::{ContactDraft, Error, NewContact, StoredContact};

/// Domain service behind the contact endpoint.
#[derive(Clone)]
pub struct ContactSubmissionService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ContactSubmissionService<R> {
    /// Create a service writing to `repository` with timestamps from `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn map_repository_error(error: &ContactRepositoryError) -> Error {
    let kind = match error {
        ContactRepositoryError::Connection { .. } => "connection",
        ContactRepositoryError::Query { .. } => "query",
    };
    error!(%error, kind, "failed to persist contact submission");
    Error::internal(format!("contact submission not stored: {error}"))
}

#[async_trait]
impl<R> ContactSubmissionCommand for ContactSubmissionService<R>
where
    R: ContactRepository,
{
    async fn submit(&self, draft: ContactDraft) -> Result<StoredContact, Error> {
        let submission = draft.validate().map_err(|rejection| {
            let codes: Vec<&str> = rejection.violations().iter().map(|v| v.code()).collect();
            debug!(violations = ?codes, "contact submission rejected");
            Error::invalid_request(rejection.to_string())
        })?;

        let contact = NewContact {
            submission,
            created_at: self.clock.utc(),
        };
        let stored = self
            .repository
            .insert(&contact)
            .await
            .map_err(|err| map_repository_error(&err))?;

        info!(
            contact_id = %stored.id,
            category = %contact.submission.category(),
            priority = %contact.submission.priority(),
            "contact submission stored"
        );
        Ok(stored)
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
