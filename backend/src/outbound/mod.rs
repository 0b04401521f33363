//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed contact store using Diesel.
//!
//! Adapters convert between domain types and infrastructure representations.
//! They contain no business logic.

pub mod persistence;
