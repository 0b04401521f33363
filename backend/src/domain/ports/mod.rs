//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_repository;
mod contact_submission_command;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use contact_submission_command::MockContactSubmissionCommand;
pub use contact_submission_command::ContactSubmissionCommand;
