// SPDX-License-Identifier: MPL-2.0
//! Column descriptors.

use super::cell::TableRow;
use std::fmt;

/// Horizontal alignment of a column's header and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Align> for iced::alignment::Horizontal {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => iced::alignment::Horizontal::Left,
            Align::Center => iced::alignment::Horizontal::Center,
            Align::Right => iced::alignment::Horizontal::Right,
        }
    }
}

type Renderer<T> = Box<dyn Fn(&T) -> String>;

/// Describes one table column: which field it shows and how.
///
/// ```
/// use invoice_kit::ui::data_table::{Align, CellValue, Column, TableRow};
///
/// struct Line { id: u32, amount: f64 }
///
/// impl TableRow for Line {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
///     fn cell(&self, key: &str) -> CellValue {
///         match key {
///             "amount" => self.amount.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
///
/// let column = Column::<Line>::new("amount", "Amount")
///     .sortable()
///     .align(Align::Right)
///     .render(|line| format!("${:.2}", line.amount));
///
/// assert_eq!(column.text(&Line { id: 1, amount: 12.5 }), "$12.50");
/// ```
pub struct Column<T> {
    key: String,
    label: String,
    render: Option<Renderer<T>>,
    sortable: bool,
    align: Align,
}

impl<T: TableRow> Column<T> {
    /// Creates a left-aligned, non-sortable column for field `key`.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: None,
            sortable: false,
            align: Align::Left,
        }
    }

    /// Lets users sort by this column.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Replaces the default cell text with a custom formatter.
    #[must_use]
    pub fn render(mut self, render: impl Fn(&T) -> String + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    #[must_use]
    pub fn alignment(&self) -> Align {
        self.align
    }

    /// Text shown for `row` in this column.
    #[must_use]
    pub fn text(&self, row: &T) -> String {
        match &self.render {
            Some(render) => render(row),
            None => row.cell(&self.key).to_string(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}
