//! Driving port for accepting contact submissions.

use async_trait::async_trait;

use crate::domain::{ContactDraft, Error, StoredContact};

/// Use-case invoked by inbound adapters when a visitor submits the form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSubmissionCommand: Send + Sync {
    /// Validate `draft` and persist it.
    ///
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] listing every
    /// violation when validation fails, and
    /// [`crate::domain::ErrorCode::InternalError`] when the store fails.
    async fn submit(&self, draft: ContactDraft) -> Result<StoredContact, Error>;
}
