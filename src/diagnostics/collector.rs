// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Components hold a [`DiagnosticsHandle`] and send events through a bounded
//! channel; the owner of the [`DiagnosticsCollector`] drains the channel into
//! a circular buffer on its own schedule.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DismissReason,
    WarningEvent,
};
use crate::ui::data_table::SortDirection;
use crate::ui::notifications::NotificationKind;

/// Channel capacity for event buffering between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event
/// is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an arbitrary event kind.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    /// Logs that a notification entered the queue.
    pub fn log_notification_shown(&self, kind: NotificationKind, persistent: bool) {
        self.log(DiagnosticEventKind::NotificationShown { kind, persistent });
    }

    /// Logs that a notification left the queue.
    pub fn log_notification_dismissed(&self, reason: DismissReason) {
        self.log(DiagnosticEventKind::NotificationDismissed { reason });
    }

    /// Logs a sort directive change.
    pub fn log_sort(&self, column: impl Into<String>, direction: Option<SortDirection>) {
        self.log(DiagnosticEventKind::TableSorted {
            column: column.into(),
            direction,
        });
    }

    /// Logs a selection change.
    pub fn log_selection(&self, selected: usize, total: usize) {
        self.log(DiagnosticEventKind::SelectionChanged { selected, total });
    }

    /// Logs a warning event.
    pub fn log_warning(&self, event: WarningEvent) {
        self.log(DiagnosticEventKind::Warning { event });
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// An event in an exported report, timed relative to collection start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableEvent {
    /// Milliseconds since the collector was created.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// JSON report produced by [`DiagnosticsCollector::export_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub collection_started_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<SerializableEvent>,
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, used for event offsets.
    collection_started_at: Instant,
    /// Wall clock start, used for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an event directly to the buffer, bypassing the channel.
    pub fn log(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the stored event kinds (oldest first).
    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticEventKind> {
        self.buffer.iter().map(|event| &event.kind)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.collection_started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            collection_started_at: self.collection_started_at_utc,
            generated_at: Utc::now(),
            event_count: events.len(),
            events,
        }
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::WarningType;

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log_notification_shown(NotificationKind::Success, false);
        handle.log_selection(2, 3);
        assert!(collector.is_empty());

        collector.process_pending();
        let kinds: Vec<_> = collector.kinds().cloned().collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::NotificationShown {
                    kind: NotificationKind::Success,
                    persistent: false,
                },
                DiagnosticEventKind::SelectionChanged {
                    selected: 2,
                    total: 3
                },
            ]
        );
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        for _ in 0..DEFAULT_CHANNEL_CAPACITY {
            handle.log_notification_dismissed(DismissReason::Manual);
        }
        let overflow = handle.try_log(DiagnosticEventKind::NotificationDismissed {
            reason: DismissReason::Expired,
        });
        assert!(matches!(overflow, Err(TrySendError::Full(_))));
    }

    #[test]
    fn buffer_keeps_most_recent_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(0));
        let min = collector.capacity();

        for i in 0..(min + 5) {
            collector.log(DiagnosticEventKind::SelectionChanged {
                selected: i,
                total: min + 5,
            });
        }

        assert_eq!(collector.len(), min);
        assert_eq!(
            collector.kinds().next(),
            Some(&DiagnosticEventKind::SelectionChanged {
                selected: 5,
                total: min + 5
            })
        );
    }

    #[test]
    fn export_json_contains_events_and_count() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        collector.handle().log_warning(WarningEvent::new(
            WarningType::DuplicateRowId,
            "duplicate row id 42",
        ));
        collector.handle().log_sort("due_date", None);
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let report: DiagnosticReport = serde_json::from_str(&json).expect("report parses");

        assert_eq!(report.event_count, 2);
        assert_eq!(
            report.events[1].kind,
            DiagnosticEventKind::TableSorted {
                column: "due_date".to_string(),
                direction: None,
            }
        );
    }
}
