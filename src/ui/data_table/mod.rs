// SPDX-License-Identifier: MPL-2.0
//! Sortable, selectable data table.
//!
//! The table owns its rows and keeps two independent pieces of state: an
//! optional sort directive and a set of selected row ids. The caller's rows
//! are never reordered; display order is derived on every render.
//!
//! # Components
//!
//! - [`cell`] - `TableRow` trait and comparable `CellValue`s
//! - [`column`] - column definitions (key, label, alignment, renderer)
//! - [`sort`] - the asc/desc/none cycle and the stable sorted view
//! - [`selection`] - identity-based selection and the select-all tri-state
//! - [`state`] - `DataTable` tying it together behind `update`
//! - `view` - iced rendering
//!
//! # Usage
//!
//! ```
//! use invoice_kit::ui::data_table::{CellValue, CheckState, Column, DataTable, TableRow};
//!
//! struct Line {
//!     id: u32,
//!     amount: f64,
//! }
//!
//! impl TableRow for Line {
//!     type Id = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//!
//!     fn cell(&self, key: &str) -> CellValue {
//!         match key {
//!             "amount" => self.amount.into(),
//!             _ => CellValue::Empty,
//!         }
//!     }
//! }
//!
//! let rows = vec![Line { id: 1, amount: 20.0 }, Line { id: 2, amount: 5.0 }];
//! let mut table = DataTable::new(vec![Column::new("amount", "Amount").sortable()], rows)
//!     .selectable(true);
//!
//! table.set_sort("amount");
//! let order: Vec<u32> = table.sorted_rows().iter().map(|line| line.id).collect();
//! assert_eq!(order, vec![2, 1]);
//!
//! table.toggle_row(&1);
//! assert_eq!(table.select_all_state(), CheckState::Indeterminate);
//! ```

pub mod cell;
pub mod column;
pub mod selection;
pub mod sort;
pub mod state;
mod view;

pub use cell::{CellValue, TableRow};
pub use column::{Align, Column};
pub use selection::{CheckState, Selection};
pub use sort::{next_sort, sorted_view, SortDirection, SortDirective};
pub use state::{DataTable, Event, Message as TableMessage};
