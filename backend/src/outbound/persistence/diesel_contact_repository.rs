//! PostgreSQL-backed `ContactRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{ContactId, NewContact, StoredContact};

use super::models::{InsertedContactRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contact;

/// Diesel implementation of the [`ContactRepository`] port.
///
/// Each insert checks out one pooled connection for the duration of a single
/// `INSERT ... RETURNING` statement; the connection returns to the pool when
/// the call ends, whatever the outcome.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ContactRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
            _,
        ) => ContactRepositoryError::connection("database connection error"),
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            ContactRepositoryError::query("row violates a contact table constraint")
        }
        DieselError::QueryBuilderError(_) => ContactRepositoryError::query("database query error"),
        _ => ContactRepositoryError::query("database error"),
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn insert(&self, new: &NewContact) -> Result<StoredContact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let submission = &new.submission;
        let row = NewContactRow {
            name: submission.name(),
            email: submission.email(),
            category: submission.category().as_str(),
            message: submission.message(),
            priority: submission.priority().as_str(),
            created_at: new.created_at,
        };

        let inserted: InsertedContactRow = diesel::insert_into(contact::table)
            .values(&row)
            .returning(InsertedContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(StoredContact {
            id: ContactId::new(inserted.id),
            created_at: inserted.created_at,
        })
    }
}
