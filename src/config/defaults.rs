// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Bounds live with the domain newtypes; this module re-exposes them under
//! configuration names so `settings.toml` handling has one place to look.

use crate::domain::{
    buffer_capacity_bounds, lifetime_bounds, rows_per_page_bounds, tick_interval_bounds,
};

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime applied when a producer does not pass one (in milliseconds).
pub const DEFAULT_NOTIFICATION_LIFETIME_MS: i64 = lifetime_bounds::DEFAULT_MS;

/// Default interval between auto-dismiss checks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_interval_bounds::DEFAULT_MS;

/// Minimum interval between auto-dismiss checks (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = tick_interval_bounds::MIN_MS;

/// Maximum interval between auto-dismiss checks (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = tick_interval_bounds::MAX_MS;

// ==========================================================================
// Table Defaults
// ==========================================================================

/// Default number of rows per table page.
pub const DEFAULT_ROWS_PER_PAGE: usize = rows_per_page_bounds::DEFAULT;

/// Minimum number of rows per table page.
pub const MIN_ROWS_PER_PAGE: usize = rows_per_page_bounds::MIN;

/// Maximum number of rows per table page.
pub const MAX_ROWS_PER_PAGE: usize = rows_per_page_bounds::MAX;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum number of diagnostic events kept in memory.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum number of diagnostic events kept in memory.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;
