// SPDX-License-Identifier: MPL-2.0
//! Cancellable auto-dismiss schedule.
//!
//! Each pending removal is a deadline keyed by notification id. Dismissing a
//! notification cancels its entry, so no removal can outlive the
//! notification it was scheduled for.

use super::notification::NotificationId;
use std::collections::HashMap;
use std::time::Instant;

/// Pending auto-removals, at most one per notification.
#[derive(Debug, Default, Clone)]
pub struct DismissSchedule {
    deadlines: HashMap<NotificationId, Instant>,
}

impl DismissSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a removal, replacing any existing one for the same id.
    pub fn schedule(&mut self, id: NotificationId, deadline: Instant) {
        self.deadlines.insert(id, deadline);
    }

    /// Cancels the pending removal for `id`.
    ///
    /// Returns `true` if one was pending.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    /// Returns the deadline scheduled for `id`, if any.
    #[must_use]
    pub fn deadline(&self, id: NotificationId) -> Option<Instant> {
        self.deadlines.get(&id).copied()
    }

    /// Removes and returns every entry whose deadline is at or before `now`,
    /// earliest deadline first (ties by id).
    pub fn take_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut due: Vec<(Instant, NotificationId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort_unstable();

        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}
