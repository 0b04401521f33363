//! Port for persisting contact submissions.
//!
//! The store is append-only from this system's point of view: one call to
//! [`ContactRepository::insert`] writes exactly one row and there is no
//! update or delete path.

use async_trait::async_trait;

use crate::domain::{NewContact, StoredContact};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// A store connection could not be obtained.
        Connection { message: String } =>
            "contact repository connection failed: {message}",
        /// The insert statement failed.
        Query { message: String } =>
            "contact repository query failed: {message}",
    }
}

/// Append-only storage for validated submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert one row and return its identifier.
    ///
    /// Identical submissions are not deduplicated; each call creates a new
    /// row.
    async fn insert(&self, contact: &NewContact) -> Result<StoredContact, ContactRepositoryError>;
}
