// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications are short, non-blocking messages (invoice sent, payment
//! failed, ...). They are shown in insertion order and removed either by
//! the user or once their lifetime elapses.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct, `NotificationKind` and ids
//! - [`schedule`] - cancellable auto-dismiss deadlines keyed by id
//! - [`manager`] - `Manager` owning the ordered list and its schedule
//! - [`toast`] - Toast widget rendering notifications
//!
//! # Usage
//!
//! ```
//! use invoice_kit::ui::notifications::{Manager, NotificationKind};
//!
//! let mut manager = Manager::new();
//!
//! // Default lifetime (5s)
//! manager.success("Invoice INV-0042 sent", None, None);
//!
//! // Stays until dismissed
//! let id = manager.error("Payment failed", Some("Card declined"), Some(0));
//!
//! assert_eq!(manager.len(), 2);
//! manager.dismiss(id);
//! assert_eq!(manager.list()[0].kind(), NotificationKind::Success);
//! ```
//!
//! Drive expiry by routing [`Manager::subscription`] ticks to
//! [`Manager::handle_message`], and render with [`Toast::view_overlay`].

mod manager;
mod notification;
mod schedule;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, NotificationKind};
pub use schedule::DismissSchedule;
pub use toast::{accent_color, Toast};
