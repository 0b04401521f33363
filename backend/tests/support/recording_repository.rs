//! In-memory `ContactRepository` doubles for HTTP end-to-end tests.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use contact_backend::domain::ports::{ContactRepository, ContactRepositoryError};
use contact_backend::domain::{ContactId, ContactSubmission, NewContact, StoredContact};

/// Stores every inserted submission in memory, assigning sequential ids.
#[derive(Clone, Default)]
pub struct RecordingContactRepository {
    rows: Arc<Mutex<Vec<NewContact>>>,
}

impl RecordingContactRepository {
    /// Submissions inserted so far, in order.
    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|row| row.submission.clone())
            .collect()
    }
}

#[async_trait]
impl ContactRepository for RecordingContactRepository {
    async fn insert(&self, contact: &NewContact) -> Result<StoredContact, ContactRepositoryError> {
        let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        rows.push(contact.clone());
        let id = i64::try_from(rows.len())
            .map_err(|_| ContactRepositoryError::query("row id overflow"))?;
        Ok(StoredContact {
            id: ContactId::new(id),
            created_at: contact.created_at,
        })
    }
}

/// Fails every insert with a connection error carrying sensitive-looking
/// detail, so tests can assert it never reaches the client.
#[derive(Clone, Copy, Default)]
pub struct FailingContactRepository;

#[async_trait]
impl ContactRepository for FailingContactRepository {
    async fn insert(&self, _contact: &NewContact) -> Result<StoredContact, ContactRepositoryError> {
        Err(ContactRepositoryError::connection(
            "password authentication failed for user \"root\" at db.internal:5432",
        ))
    }
}
