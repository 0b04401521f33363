//! The single notification banner owned by an agent.
//!
//! At most one notification is visible. Showing a new one evicts the current
//! one, and each expires after the configured display duration.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The submission was stored.
    Success,
    /// The form or the server rejected the submission.
    Error,
    /// No response arrived from the server.
    NetworkError,
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    text: String,
    shown_at: DateTime<Utc>,
}

impl Notification {
    /// Category of the message.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Message text, possibly spanning several lines.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the notification was shown.
    #[must_use]
    pub const fn shown_at(&self) -> DateTime<Utc> {
        self.shown_at
    }
}

/// Holder for the one visible notification.
pub struct NotificationSlot {
    current: Mutex<Option<Notification>>,
    display_for: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl NotificationSlot {
    /// Create an empty slot whose notifications last `display_for`.
    #[must_use]
    pub fn new(display_for: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            current: Mutex::new(None),
            display_for: TimeDelta::from_std(display_for).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Notification>> {
        self.current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Show `text`, replacing whatever is visible.
    pub fn show(&self, kind: NotificationKind, text: impl Into<String>) {
        let notification = Notification {
            kind,
            text: text.into(),
            shown_at: self.clock.utc(),
        };
        *self.lock() = Some(notification);
    }

    /// The visible notification, or `None` once it has expired.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        let mut slot = self.lock();
        let expired = slot.as_ref().is_some_and(|notification| {
            self.clock.utc().signed_duration_since(notification.shown_at) >= self.display_for
        });
        if expired {
            *slot = None;
        }
        slot.clone()
    }

    /// Hide the visible notification immediately.
    pub fn dismiss(&self) {
        *self.lock() = None;
    }
}
