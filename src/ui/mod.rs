// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, exposes an `update` taking its own `Message`, and renders
//! through a `view` returning an iced `Element`.
//!
//! - [`notifications`] - toast queue with timed auto-dismissal
//! - [`data_table`] - sortable table with row selection
//! - [`pagination`] - page navigation for long tables

pub mod data_table;
pub mod notifications;
pub mod pagination;
