// SPDX-License-Identifier: MPL-2.0
//! Row records and the cell values they expose to the table.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// A record that can be shown as one table row.
///
/// `id` must be unique within a table; selection is tracked by it.
pub trait TableRow {
    type Id: Clone + Eq + Hash + fmt::Debug + 'static;

    /// Stable identity of the row.
    fn id(&self) -> Self::Id;

    /// Value of the field named `key`, or [`CellValue::Empty`] if none.
    fn cell(&self, key: &str) -> CellValue;
}

/// A single field value, used both for sorting and default rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl CellValue {
    /// Orders two values for sorting.
    ///
    /// Same kinds compare naturally and integers compare with decimals
    /// numerically. Different kinds fall back to a fixed kind order with
    /// `Empty` first, so mixed columns still sort deterministically.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Decimal(a), CellValue::Decimal(b)) => compare_decimals(*a, *b),
            (CellValue::Integer(a), CellValue::Decimal(b)) => compare_integer_decimal(*a, *b),
            (CellValue::Decimal(a), CellValue::Integer(b)) => {
                compare_integer_decimal(*b, *a).reverse()
            }
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Decimal(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
        }
    }
}

/// Orders decimals numerically; every NaN is equal and sorts after all numbers.
fn compare_decimals(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compares an integer with a decimal exactly, without rounding the integer
/// to the nearest float. NaN sorts after every integer.
fn compare_integer_decimal(int: i64, dec: f64) -> Ordering {
    // 2^63, the smallest float above i64::MAX
    const I64_END: f64 = 9_223_372_036_854_775_808.0;

    if dec.is_nan() || dec >= I64_END {
        return Ordering::Less;
    }
    if dec < -I64_END {
        return Ordering::Greater;
    }

    let whole = dec.trunc();
    // Exact: `whole` is integral and within i64 range
    #[allow(clippy::cast_possible_truncation)]
    let whole_int = whole as i64;
    let fraction = dec - whole;
    int.cmp(&whole_int)
        .then_with(|| 0.0_f64.partial_cmp(&fraction).unwrap_or(Ordering::Equal))
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(value) => write!(f, "{value}"),
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Decimal(value) => write!(f, "{value}"),
            CellValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            CellValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Decimal(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}
