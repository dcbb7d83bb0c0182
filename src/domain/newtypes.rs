// SPDX-License-Identifier: MPL-2.0
//! Domain newtypes.
//!
//! Type-safe wrappers that keep configuration-driven values within
//! valid ranges, so call sites never clamp by hand.

use std::time::Duration;

// =============================================================================
// Lifetime
// =============================================================================

/// Notification lifetime constants.
pub mod lifetime_bounds {
    /// Default lifetime of a notification in milliseconds.
    pub const DEFAULT_MS: i64 = 5000;

    /// Longest timed lifetime (one day); longer requests are clamped.
    pub const MAX_MS: u64 = 24 * 60 * 60 * 1000;
}

/// How long a notification stays in the queue before it is removed.
///
/// A lifetime of zero or less milliseconds maps to [`Lifetime::Persistent`]:
/// the notification stays until it is dismissed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// Removed automatically once the duration has elapsed.
    After(Duration),
    /// Never removed automatically.
    Persistent,
}

impl Lifetime {
    /// Builds a lifetime from a signed millisecond count, clamped to
    /// [`lifetime_bounds::MAX_MS`].
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        match u64::try_from(millis) {
            Ok(0) | Err(_) => Lifetime::Persistent,
            Ok(ms) => Lifetime::After(Duration::from_millis(ms.min(lifetime_bounds::MAX_MS))),
        }
    }

    /// Returns the auto-dismiss duration, or `None` when persistent.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Lifetime::After(duration) => Some(duration),
            Lifetime::Persistent => None,
        }
    }

    /// Returns true if this lifetime never expires on its own.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        matches!(self, Lifetime::Persistent)
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::from_millis(lifetime_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Tick interval bounds (16ms to 1s).
pub mod tick_interval_bounds {
    /// Minimum interval in milliseconds (roughly one frame at 60 Hz).
    pub const MIN_MS: u64 = 16;
    /// Maximum interval in milliseconds.
    pub const MAX_MS: u64 = 1000;
    /// Default interval in milliseconds.
    pub const DEFAULT_MS: u64 = 100;
}

/// Interval between auto-dismiss checks.
///
/// The effective expiry of a notification is late by at most one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(
            tick_interval_bounds::MIN_MS,
            tick_interval_bounds::MAX_MS,
        ))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// RowsPerPage
// =============================================================================

/// Rows-per-page bounds for paginated tables.
pub mod rows_per_page_bounds {
    /// Minimum rows on a page.
    pub const MIN: usize = 1;
    /// Maximum rows on a page.
    pub const MAX: usize = 500;
    /// Default rows on a page.
    pub const DEFAULT: usize = 25;
}

/// Number of table rows shown per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsPerPage(usize);

impl RowsPerPage {
    /// Creates a new page size, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(rows_per_page_bounds::MIN, rows_per_page_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for RowsPerPage {
    fn default() -> Self {
        Self(rows_per_page_bounds::DEFAULT)
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Buffer capacity bounds (100 to 10000 events).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 100;
    /// Maximum buffer capacity.
    pub const MAX: usize = 10000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 1000;
}

/// Capacity of the diagnostic event buffer.
///
/// ```
/// use invoice_kit::domain::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(1000).value(), 1000);
/// assert_eq!(BufferCapacity::new(50_000).value(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifetime_zero_and_negative_are_persistent() {
        assert_eq!(Lifetime::from_millis(0), Lifetime::Persistent);
        assert_eq!(Lifetime::from_millis(-250), Lifetime::Persistent);
        assert!(Lifetime::from_millis(i64::MIN).is_persistent());
    }

    #[test]
    fn lifetime_positive_becomes_duration() {
        assert_eq!(
            Lifetime::from_millis(1200).duration(),
            Some(Duration::from_millis(1200))
        );
    }

    #[test]
    fn lifetime_clamps_to_one_day() {
        assert_eq!(
            Lifetime::from_millis(i64::MAX).duration(),
            Some(Duration::from_millis(lifetime_bounds::MAX_MS))
        );
    }

    #[test]
    fn lifetime_default_is_five_seconds() {
        assert_eq!(Lifetime::default().duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn tick_interval_clamps() {
        assert_eq!(TickInterval::new(0).millis(), tick_interval_bounds::MIN_MS);
        assert_eq!(
            TickInterval::new(60_000).millis(),
            tick_interval_bounds::MAX_MS
        );
        assert_eq!(
            TickInterval::default().as_duration(),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn rows_per_page_clamps() {
        assert_eq!(RowsPerPage::new(0).value(), rows_per_page_bounds::MIN);
        assert_eq!(RowsPerPage::new(9999).value(), rows_per_page_bounds::MAX);
        assert_eq!(RowsPerPage::new(50).value(), 50);
    }

    #[test]
    fn buffer_capacity_clamps() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(100_000).value(),
            buffer_capacity_bounds::MAX
        );
        assert_eq!(
            BufferCapacity::default().value(),
            buffer_capacity_bounds::DEFAULT
        );
    }
}
