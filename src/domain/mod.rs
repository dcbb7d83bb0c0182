// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no presentation dependencies.
//!
//! # Modules
//!
//! - [`newtypes`]: clamped value objects ([`Lifetime`](newtypes::Lifetime),
//!   [`TickInterval`](newtypes::TickInterval), [`RowsPerPage`](newtypes::RowsPerPage),
//!   [`BufferCapacity`](newtypes::BufferCapacity))

pub mod newtypes;

pub use newtypes::{
    buffer_capacity_bounds, lifetime_bounds, rows_per_page_bounds, tick_interval_bounds,
    BufferCapacity, Lifetime, RowsPerPage, TickInterval,
};
