// SPDX-License-Identifier: MPL-2.0
//! `invoice_kit` provides stateful UI building blocks for invoicing screens
//! built with the Iced GUI framework.
//!
//! - [`ui::notifications`]: an ordered toast queue with cancellable timed removal
//! - [`ui::data_table`]: a table with a three-step sort cycle and row selection
//! - [`ui::pagination`]: page navigation for long tables
//!
//! Settings are read from `settings.toml` through [`config`], and component
//! activity can be recorded with the [`diagnostics`] collector.

#![doc(html_root_url = "https://docs.rs/invoice_kit/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
