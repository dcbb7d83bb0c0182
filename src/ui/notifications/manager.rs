// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered notification list and the schedule of
//! pending auto-removals. It is an ordinary value: create one, keep it in
//! the application state, and pass it to whatever renders toasts.

use super::notification::{Notification, NotificationId, NotificationKind};
use super::schedule::DismissSchedule;
use crate::config::NotificationsConfig;
use crate::diagnostics::{DiagnosticsHandle, DismissReason};
use crate::domain::{Lifetime, TickInterval};
use iced::Subscription;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Periodic tick carrying the current time, for auto-dismiss.
    Tick(Instant),
}

/// Manages the ordered collection of active notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Active notifications in insertion order.
    notifications: Vec<Notification>,
    /// Pending auto-removals keyed by id.
    schedule: DismissSchedule,
    /// Lifetime applied when a notification does not carry one.
    default_lifetime: Lifetime,
    tick_interval: TickInterval,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates a new empty notification manager with a 5s default lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager using the configured lifetime and tick interval.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self {
            default_lifetime: config.lifetime(),
            tick_interval: config.tick_interval(),
            ..Self::default()
        }
    }

    /// Sets the lifetime used when producers pass none.
    #[must_use]
    pub fn with_default_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.default_lifetime = lifetime;
        self
    }

    /// Sets the diagnostics handle for logging queue activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn default_lifetime(&self) -> Lifetime {
        self.default_lifetime
    }

    // =========================================================================
    // Producers
    // =========================================================================

    /// Appends a notification and returns its id.
    ///
    /// A positive lifetime (explicit or the default) schedules one automatic
    /// removal; a non-positive one keeps the notification until dismissed.
    pub fn enqueue(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        title: Option<&str>,
        lifetime_ms: Option<i64>,
    ) -> NotificationId {
        self.enqueue_at(kind, message, title, lifetime_ms, Instant::now())
    }

    /// Same as [`Manager::enqueue`], with the insertion time given explicitly.
    pub fn enqueue_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        title: Option<&str>,
        lifetime_ms: Option<i64>,
        now: Instant,
    ) -> NotificationId {
        let mut notification = Notification::new(kind, message);
        if let Some(title) = title {
            notification = notification.with_title(title);
        }
        if let Some(ms) = lifetime_ms {
            notification = notification.with_lifetime_ms(ms);
        }
        self.push_at(notification, now)
    }

    /// Pushes a notification built with the [`Notification`] builder.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(notification, Instant::now())
    }

    /// Same as [`Manager::push`], with the insertion time given explicitly.
    ///
    /// The notification gets a new id here; the returned id is the one to
    /// dismiss it with.
    pub fn push_at(&mut self, mut notification: Notification, now: Instant) -> NotificationId {
        let id = notification.assign_id();
        let mut lifetime = notification.resolve_lifetime(self.default_lifetime);

        // A deadline past the end of the clock never comes
        match lifetime.duration().map(|duration| now.checked_add(duration)) {
            Some(Some(deadline)) => self.schedule.schedule(id, deadline),
            Some(None) => {
                lifetime = Lifetime::Persistent;
                notification = notification.with_lifetime(lifetime);
            }
            None => {}
        }
        if let Some(handle) = &self.diagnostics {
            handle.log_notification_shown(notification.kind(), lifetime.is_persistent());
        }

        self.notifications.push(notification);
        id
    }

    /// Enqueues a success notification.
    pub fn success(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
        lifetime_ms: Option<i64>,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Success, message, title, lifetime_ms)
    }

    /// Enqueues an error notification.
    pub fn error(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
        lifetime_ms: Option<i64>,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Error, message, title, lifetime_ms)
    }

    /// Enqueues a warning notification.
    pub fn warning(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
        lifetime_ms: Option<i64>,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Warning, message, title, lifetime_ms)
    }

    /// Enqueues an info notification.
    pub fn info(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
        lifetime_ms: Option<i64>,
    ) -> NotificationId {
        self.enqueue(NotificationKind::Info, message, title, lifetime_ms)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Dismisses a notification by its ID and cancels its pending removal.
    ///
    /// Returns `true` if the notification was found and removed. Unknown ids
    /// are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove(id, DismissReason::Manual)
    }

    /// Removes every notification whose lifetime has elapsed by `now`.
    ///
    /// Returns the ids that were removed, earliest deadline first.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        self.schedule
            .take_due(now)
            .into_iter()
            .filter(|id| self.remove(*id, DismissReason::Expired))
            .collect()
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Clears all notifications and their pending removals.
    pub fn clear(&mut self) {
        if let Some(handle) = &self.diagnostics {
            for _ in &self.notifications {
                handle.log_notification_dismissed(DismissReason::Cleared);
            }
        }
        self.notifications.clear();
        self.schedule.clear();
    }

    fn remove(&mut self, id: NotificationId, reason: DismissReason) -> bool {
        self.schedule.cancel(id);

        let Some(pos) = self.notifications.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.notifications.remove(pos);

        if let Some(handle) = &self.diagnostics {
            handle.log_notification_dismissed(reason);
        }
        true
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// Returns the active notifications in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns the notification with the given id.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns the number of scheduled auto-removals.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.schedule.len()
    }

    /// Returns when the next auto-removal is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule.next_deadline()
    }

    /// Ticks at the configured interval while any removal is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.schedule.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(self.tick_interval.as_duration()).map(Message::Tick)
        }
    }
}
