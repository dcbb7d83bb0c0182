// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `NotificationKind` enum
//! used throughout the notification system.

use crate::domain::Lifetime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a notification.
///
/// Ids come from a process-wide counter and are never reused, so a stale
/// removal can never hit a newer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Category of a notification, selecting its accent and meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

impl NotificationKind {
    /// All kinds, in producer order.
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    message: String,
    title: Option<String>,
    /// `None` until the manager resolves it against its default.
    lifetime: Option<Lifetime>,
}

impl Notification {
    /// Creates a new notification with the given kind and message.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            title: None,
            lifetime: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    /// Sets the title shown above the message.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the manager's default lifetime.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Overrides the lifetime in milliseconds; zero or less never expires.
    #[must_use]
    pub fn with_lifetime_ms(self, millis: i64) -> Self {
        self.with_lifetime(Lifetime::from_millis(millis))
    }

    /// Returns the id. A [`Manager`](super::Manager) replaces it with a fresh
    /// one on insertion, so only ids read from the queue identify an entry.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the lifetime, or `None` if it has not been set or resolved yet.
    #[must_use]
    pub fn lifetime(&self) -> Option<Lifetime> {
        self.lifetime
    }

    /// Stamps a fresh id; clones of one notification never share a queue id.
    pub(super) fn assign_id(&mut self) -> NotificationId {
        self.id = NotificationId::new();
        self.id
    }

    /// Fills in the lifetime if the producer left it unset.
    pub(super) fn resolve_lifetime(&mut self, default: Lifetime) -> Lifetime {
        *self.lifetime.get_or_insert(default)
    }
}
