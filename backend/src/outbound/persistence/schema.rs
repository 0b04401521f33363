//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Contact form submissions.
    ///
    /// Append-only. CHECK constraints mirror the domain validation rules so a
    /// row can never hold a value the domain would reject.
    contact (id) {
        /// Auto-assigned row identifier.
        id -> Int8,
        /// Sender name (at most 100 characters).
        name -> Varchar,
        /// Sender email (at most 255 characters).
        email -> Varchar,
        /// Category wire value; empty when unspecified.
        category -> Varchar,
        /// Message body (at most 2000 characters).
        message -> Text,
        /// One of `low`, `medium`, `high`.
        priority -> Varchar,
        /// Server-assigned insertion time.
        created_at -> Timestamptz,
    }
}
