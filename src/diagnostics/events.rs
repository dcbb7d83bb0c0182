// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::ui::data_table::SortDirection;
use crate::ui::notifications::NotificationKind;

// =============================================================================
// Warnings
// =============================================================================

/// Categories of warnings raised by the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Two or more table rows share the same identity.
    DuplicateRowId,
    /// The settings file could not be loaded; defaults were used.
    ConfigLoad,
}

/// A warning with its category and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Why a notification left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// Closed by the user or by calling code.
    Manual,
    /// Its lifetime elapsed.
    Expired,
    /// The whole queue was cleared.
    Cleared,
}

/// A diagnostic event with its monotonic capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A notification entered the queue.
    NotificationShown {
        kind: NotificationKind,
        /// True when the notification never expires on its own.
        persistent: bool,
    },
    /// A notification left the queue.
    NotificationDismissed { reason: DismissReason },
    /// A table's sort directive changed; `direction` is `None` once cleared.
    TableSorted {
        column: String,
        direction: Option<SortDirection>,
    },
    /// A table's selection changed.
    SelectionChanged { selected: usize, total: usize },
    /// Something unexpected but recoverable happened.
    Warning { event: WarningEvent },
}
