//! Error types for the contact agent.
//!
//! Only construction can fail; submissions report their result as a
//! [`crate::SubmissionOutcome`] value instead.

use thiserror::Error;

/// Errors raised while building a [`crate::ContactAgent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// The submission endpoint is not an absolute HTTP(S) URL.
    #[error("invalid submission endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The rejected endpoint text.
        endpoint: String,
        /// Why the endpoint was rejected.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    ClientBuild {
        /// Description of the builder failure.
        message: String,
    },
}
