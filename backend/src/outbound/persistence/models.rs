//! Internal Diesel row structs.
//!
//! Implementation details of the persistence layer; the domain never sees
//! them.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::contact;

/// Insertable row for the `contact` table. Every value is bound as a query
/// parameter by Diesel.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contact)]
pub(crate) struct NewContactRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub category: &'a str,
    pub message: &'a str,
    pub priority: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Columns returned after an insert.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = contact)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct InsertedContactRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}
