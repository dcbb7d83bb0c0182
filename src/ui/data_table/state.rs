// SPDX-License-Identifier: MPL-2.0
//! Data table state: input rows, columns, sort directive and selection.
//!
//! The input rows are never reordered; [`DataTable::sorted_rows`] derives
//! the display order on demand.

use super::cell::TableRow;
use super::column::Column;
use super::selection::{CheckState, Selection};
use super::sort::{next_sort, sorted_view, SortDirective};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use std::collections::HashSet;

/// Messages produced by the table view.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<Id> {
    /// A sortable column header was clicked.
    Sort(String),
    /// A row checkbox was toggled.
    ToggleRow(Id),
    /// The "select all" control was toggled.
    ToggleAll,
    /// A row was clicked outside its checkbox.
    RowClicked(Id),
}

/// Events the table reports back to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<Id> {
    /// A row was activated by a click.
    RowActivated(Id),
}

/// A sortable, selectable table over rows of type `T`.
pub struct DataTable<T: TableRow> {
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    sort: Option<SortDirective>,
    selection: Selection<T::Id>,
    /// Distinct identities of the current rows.
    present: HashSet<T::Id>,
    /// Identities carried by more than one row.
    duplicates: Vec<T::Id>,
    selectable: bool,
    empty_message: Option<String>,
    caption: Option<String>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<T: TableRow> DataTable<T> {
    /// Creates an unsorted table with nothing selected.
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        let mut table = Self {
            rows: Vec::new(),
            columns,
            sort: None,
            selection: Selection::new(),
            present: HashSet::new(),
            duplicates: Vec::new(),
            selectable: false,
            empty_message: None,
            caption: None,
            diagnostics: None,
        };
        table.set_rows(rows);
        table
    }

    /// Shows checkboxes for row selection.
    #[must_use]
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Text shown instead of the table when there are no rows.
    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Caption rendered above the table.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the diagnostics handle and reports any known duplicate ids.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
        self.report_duplicates();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Replaces the input rows.
    ///
    /// The sort directive is kept and the selection is pruned to the
    /// identities still present.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        let mut present = HashSet::with_capacity(rows.len());
        let mut duplicates = Vec::new();
        for row in &rows {
            let id = row.id();
            if !present.insert(id.clone()) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }

        self.rows = rows;
        self.present = present;
        self.duplicates = duplicates;

        let before = self.selection.len();
        let present = &self.present;
        self.selection.retain(|id| present.contains(id));
        if self.selection.len() != before {
            self.log_selection();
        }
        self.report_duplicates();
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Advances the sort cycle of column `key`.
    ///
    /// Returns `false` if the column is unknown or not sortable.
    pub fn set_sort(&mut self, key: &str) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.key() == key && column.is_sortable());
        if !sortable {
            return false;
        }

        self.sort = next_sort(self.sort.as_ref(), key);
        if let Some(handle) = &self.diagnostics {
            handle.log_sort(key, self.sort.as_ref().map(|directive| directive.direction));
        }
        true
    }

    /// Clears the sort directive, restoring input order.
    pub fn clear_sort(&mut self) {
        let Some(directive) = self.sort.take() else {
            return;
        };
        if let Some(handle) = &self.diagnostics {
            handle.log_sort(directive.column, None);
        }
    }

    /// Rows in display order.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<&T> {
        sorted_view(&self.rows, self.sort.as_ref())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flips the selection of row `id`.
    ///
    /// Ids that are not in the table are ignored; returns whether the row is
    /// selected afterwards.
    pub fn toggle_row(&mut self, id: &T::Id) -> bool {
        if !self.present.contains(id) {
            return false;
        }
        let selected = self.selection.toggle(id);
        self.log_selection();
        selected
    }

    /// Clears the selection if every row is selected, otherwise selects all.
    pub fn toggle_select_all(&mut self) {
        if self.select_all_state().is_checked() {
            self.selection.clear();
        } else {
            self.selection.select_all(self.present.iter());
        }
        self.log_selection();
    }

    /// State of the "select all" checkbox.
    #[must_use]
    pub fn select_all_state(&self) -> CheckState {
        CheckState::from_counts(self.selection.len(), self.present.len())
    }

    #[must_use]
    pub fn is_selected(&self, id: &T::Id) -> bool {
        self.selection.contains(id)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected ids, in display order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<T::Id> {
        let mut seen = HashSet::new();
        self.sorted_rows()
            .into_iter()
            .map(|row| row.id())
            .filter(|id| self.selection.contains(id) && seen.insert(id.clone()))
            .collect()
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Applies a view message; row clicks are handed back as events.
    pub fn update(&mut self, message: Message<T::Id>) -> Option<Event<T::Id>> {
        match message {
            Message::Sort(key) => {
                self.set_sort(&key);
                None
            }
            Message::ToggleRow(id) => {
                self.toggle_row(&id);
                None
            }
            Message::ToggleAll => {
                self.toggle_select_all();
                None
            }
            Message::RowClicked(id) => Some(Event::RowActivated(id)),
        }
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// Input rows, in input order.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    #[must_use]
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    #[must_use]
    pub fn sort(&self) -> Option<&SortDirective> {
        self.sort.as_ref()
    }

    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identities shared by more than one row.
    #[must_use]
    pub fn duplicate_ids(&self) -> &[T::Id] {
        &self.duplicates
    }

    #[must_use]
    pub fn empty_message(&self) -> Option<&str> {
        self.empty_message.as_deref()
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    fn log_selection(&self) {
        if let Some(handle) = &self.diagnostics {
            handle.log_selection(self.selection.len(), self.present.len());
        }
    }

    fn report_duplicates(&self) {
        if let Some(handle) = &self.diagnostics {
            for id in &self.duplicates {
                handle.log_warning(WarningEvent::new(
                    WarningType::DuplicateRowId,
                    format!("duplicate row id {id:?}"),
                ));
            }
        }
    }
}

impl<T: TableRow> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.rows.len())
            .field("columns", &self.columns)
            .field("sort", &self.sort)
            .field("selected", &self.selection.len())
            .field("selectable", &self.selectable)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
    use crate::test_utils::{ids, invoice_columns, sample_invoices, Invoice};
    use crate::ui::data_table::SortDirection;

    fn table() -> DataTable<Invoice> {
        DataTable::new(invoice_columns(), sample_invoices()).selectable(true)
    }

    fn invoices(ids: &[u32]) -> Vec<Invoice> {
        ids.iter()
            .map(|id| Invoice::new(*id, "Client", f64::from(*id), (2024, 1, 1), false))
            .collect()
    }

    #[test]
    fn new_table_is_unsorted_and_unselected() {
        let table = table();
        assert!(table.sort().is_none());
        assert_eq!(table.selected_count(), 0);
        assert_eq!(ids(table.sorted_rows()), vec![1, 2, 3, 4]);
        assert_eq!(table.select_all_state(), CheckState::Unchecked);
    }

    #[test]
    fn three_sorts_on_same_column_restore_input_order() {
        let mut table = table();
        assert!(table.set_sort("amount"));
        assert_eq!(ids(table.sorted_rows()), vec![4, 2, 1, 3]);
        assert!(table.set_sort("amount"));
        assert_eq!(ids(table.sorted_rows()), vec![1, 3, 2, 4]);
        assert!(table.set_sort("amount"));
        assert_eq!(ids(table.sorted_rows()), vec![1, 2, 3, 4]);
        assert!(table.sort().is_none());
    }

    #[test]
    fn clear_sort_restores_input_order_and_logs_once() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let mut table = table();
        table.set_diagnostics(collector.handle());

        table.set_sort("client");
        table.clear_sort();
        table.clear_sort();
        assert!(table.sort().is_none());
        assert_eq!(ids(table.sorted_rows()), vec![1, 2, 3, 4]);

        // Cleared directive starts the cycle over
        table.set_sort("client");
        assert_eq!(table.sort(), Some(&SortDirective::ascending("client")));

        collector.process_pending();
        let cleared = collector
            .kinds()
            .filter(|kind| {
                **kind
                    == DiagnosticEventKind::TableSorted {
                        column: "client".to_string(),
                        direction: None,
                    }
            })
            .count();
        assert_eq!(cleared, 1);
    }

    #[test]
    fn non_sortable_and_unknown_columns_are_ignored() {
        let mut table = table();
        table.set_sort("client");
        assert!(!table.set_sort("paid"));
        assert!(!table.set_sort("missing"));
        assert_eq!(table.sort(), Some(&SortDirective::ascending("client")));
    }

    #[test]
    fn switching_column_resets_to_ascending() {
        let mut table = table();
        table.set_sort("client");
        table.set_sort("client");
        table.set_sort("issued");
        assert_eq!(table.sort(), Some(&SortDirective::ascending("issued")));
    }

    #[test]
    fn toggle_select_all_selects_then_clears() {
        let mut table = DataTable::new(invoice_columns(), invoices(&[1, 2, 3]));

        table.toggle_select_all();
        assert_eq!(table.selected_count(), 3);
        assert_eq!(table.select_all_state(), CheckState::Checked);

        table.toggle_select_all();
        assert_eq!(table.selected_count(), 0);
        assert_eq!(table.select_all_state(), CheckState::Unchecked);
    }

    #[test]
    fn partial_selection_is_indeterminate_and_select_all_completes_it() {
        let mut table = DataTable::new(invoice_columns(), invoices(&[1, 2, 3]));
        table.toggle_row(&2);
        assert_eq!(table.select_all_state(), CheckState::Indeterminate);

        table.toggle_select_all();
        assert_eq!(table.select_all_state(), CheckState::Checked);
    }

    #[test]
    fn empty_table_select_all_stays_unchecked() {
        let mut table: DataTable<Invoice> = DataTable::new(invoice_columns(), Vec::new());
        assert_eq!(table.select_all_state(), CheckState::Unchecked);

        table.toggle_select_all();
        assert_eq!(table.select_all_state(), CheckState::Unchecked);
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn unknown_row_id_is_a_no_op() {
        let mut table = table();
        assert!(!table.toggle_row(&42));
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn selection_and_sort_are_independent() {
        let mut table = table();
        table.set_sort("client");
        table.toggle_row(&3);
        assert_eq!(table.sort(), Some(&SortDirective::ascending("client")));

        table.set_sort("client");
        table.set_sort("amount");
        assert!(table.is_selected(&3));
        assert_eq!(table.selected_count(), 1);
    }

    #[test]
    fn selected_ids_follow_display_order() {
        let mut table = table();
        table.toggle_row(&1);
        table.toggle_row(&4);
        assert_eq!(table.selected_ids(), vec![1, 4]);

        table.set_sort("amount");
        assert_eq!(table.selected_ids(), vec![4, 1]);
    }

    #[test]
    fn set_rows_prunes_selection_and_keeps_sort() {
        let mut table = table();
        table.set_sort("amount");
        table.toggle_select_all();

        table.set_rows(invoices(&[2, 4, 5]));
        assert_eq!(table.selected_count(), 2);
        assert!(table.is_selected(&2) && table.is_selected(&4));
        assert!(!table.is_selected(&5));
        assert_eq!(table.select_all_state(), CheckState::Indeterminate);
        assert_eq!(table.sort(), Some(&SortDirective::ascending("amount")));
    }

    #[test]
    fn duplicate_ids_are_detected_and_share_selection() {
        let mut rows = invoices(&[1, 2]);
        rows.push(Invoice::new(2, "Twin", 5.0, (2024, 6, 1), true));
        let mut table = DataTable::new(invoice_columns(), rows);

        assert_eq!(table.duplicate_ids(), &[2]);
        assert_eq!(table.sorted_rows().len(), 3);

        table.toggle_row(&2);
        table.toggle_row(&1);
        assert_eq!(table.select_all_state(), CheckState::Checked);
        assert_eq!(table.selected_ids(), vec![1, 2]);
    }

    #[test]
    fn update_routes_messages_and_returns_row_events() {
        let mut table = table();
        assert_eq!(table.update(Message::Sort("number".to_string())), None);
        assert_eq!(table.update(Message::ToggleRow(2)), None);
        assert_eq!(table.update(Message::ToggleAll), None);
        assert_eq!(
            table.update(Message::RowClicked(3)),
            Some(Event::RowActivated(3))
        );
        assert_eq!(table.select_all_state(), CheckState::Checked);
        assert!(table.sort().is_some());
    }

    #[test]
    fn diagnostics_record_sort_selection_and_duplicates() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let mut rows = invoices(&[1]);
        rows.push(Invoice::new(1, "Twin", 1.0, (2024, 1, 1), false));
        let mut table = DataTable::new(invoice_columns(), rows);
        table.set_diagnostics(collector.handle());

        table.set_sort("amount");
        table.set_sort("amount");
        table.set_sort("amount");
        table.toggle_row(&1);

        collector.process_pending();
        let kinds: Vec<_> = collector.kinds().cloned().collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::Warning { .. }));
        assert_eq!(
            kinds[1..],
            [
                DiagnosticEventKind::TableSorted {
                    column: "amount".to_string(),
                    direction: Some(SortDirection::Ascending),
                },
                DiagnosticEventKind::TableSorted {
                    column: "amount".to_string(),
                    direction: Some(SortDirection::Descending),
                },
                DiagnosticEventKind::TableSorted {
                    column: "amount".to_string(),
                    direction: None,
                },
                DiagnosticEventKind::SelectionChanged {
                    selected: 1,
                    total: 1
                },
            ]
        );
    }
}
