//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module; every database failure is mapped to
//! [`crate::domain::ports::ContactRepositoryError`].
//!
//! # Example
//!
//! ```ignore
//! use contact_backend::outbound::persistence::{
//!     DbPool, DieselContactRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/contact_db").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/contact_db")).await?;
//! let repository = DieselContactRepository::new(pool);
//! ```

mod diesel_contact_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
