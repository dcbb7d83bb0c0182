// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording component activity.
//!
//! Notification and table state changes are sent as structured events to
//! a collector that keeps them in a memory-bounded circular buffer and can
//! export them as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped event and its [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-backed sink
//!   and its cheap, cloneable sender

mod buffer;
mod collector;
mod events;

pub use crate::domain::BufferCapacity;
pub use buffer::CircularBuffer;
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason, WarningEvent, WarningType};
