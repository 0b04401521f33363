//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! domain ports, so they remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ContactSubmissionCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contact: Arc<dyn ContactSubmissionCommand>,
}

impl HttpState {
    /// Construct state around the contact submission use-case.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use contact_backend::domain::ContactSubmissionService;
    /// use contact_backend::inbound::http::state::HttpState;
    /// use contact_backend::outbound::persistence::{
    ///     DbPool, DieselContactRepository, PoolConfig, PoolError,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// # async fn demo() -> Result<(), PoolError> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/contact_db")).await?;
    /// let service = ContactSubmissionService::new(
    ///     Arc::new(DieselContactRepository::new(pool)),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::new(Arc::new(service));
    /// let _contact = state.contact.clone();
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(contact: Arc<dyn ContactSubmissionCommand>) -> Self {
        Self { contact }
    }
}
