// SPDX-License-Identifier: MPL-2.0
//! Rendering of a [`DataTable`] with iced widgets.

use super::cell::TableRow;
use super::column::Column;
use super::selection::CheckState;
use super::sort::SortDirection;
use super::state::{DataTable, Message};
use iced::font::Weight;
use iced::widget::{button, checkbox, container, mouse_area, text, Column as WidgetColumn, Row};
use iced::{alignment, Element, Font, Length};

const CELL_PADDING: f32 = 8.0;
const CHECKBOX_WIDTH: f32 = 36.0;
const TEXT_SIZE: f32 = 14.0;
const DEFAULT_EMPTY_MESSAGE: &str = "No rows to display";

/// Marker shown next to the label of the sorted column.
fn sort_marker(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

impl<T: TableRow> DataTable<T> {
    /// Renders the table, or its empty state when there are no rows.
    pub fn view(&self) -> Element<'_, Message<T::Id>> {
        let mut layout = WidgetColumn::new().width(Length::Fill);

        if let Some(caption) = self.caption() {
            layout = layout.push(
                container(text(caption.to_string()).size(TEXT_SIZE))
                    .padding(CELL_PADDING),
            );
        }

        if self.is_empty() {
            let message = self.empty_message().unwrap_or(DEFAULT_EMPTY_MESSAGE);
            return layout
                .push(
                    container(text(message.to_string()).size(TEXT_SIZE))
                        .width(Length::Fill)
                        .padding(CELL_PADDING * 2.0)
                        .align_x(alignment::Horizontal::Center),
                )
                .into();
        }

        layout = layout.push(self.header());
        for row in self.sorted_rows() {
            layout = layout.push(self.body_row(row));
        }
        layout.into()
    }

    fn header(&self) -> Element<'_, Message<T::Id>> {
        let mut header = Row::new().width(Length::Fill);

        if self.is_selectable() {
            let control: Element<'_, Message<T::Id>> = match self.select_all_state() {
                CheckState::Indeterminate => button(text("−").size(TEXT_SIZE))
                    .on_press(Message::ToggleAll)
                    .padding(0.0)
                    .style(button::text)
                    .into(),
                state => checkbox(state.is_checked())
                    .on_toggle(|_| Message::ToggleAll)
                    .into(),
            };
            header = header.push(container(control).width(Length::Fixed(CHECKBOX_WIDTH)));
        }

        for column in self.columns() {
            header = header.push(self.header_cell(column));
        }
        header.into()
    }

    fn header_cell(&self, column: &Column<T>) -> Element<'_, Message<T::Id>> {
        let bold = Font {
            weight: Weight::Bold,
            ..Font::default()
        };
        let marker = self
            .sort()
            .filter(|directive| directive.column == column.key())
            .map(|directive| sort_marker(directive.direction));

        let label = match marker {
            Some(marker) => format!("{} {}", column.label(), marker),
            None => column.label().to_string(),
        };
        let label = text(label).size(TEXT_SIZE).font(bold);

        let content: Element<'_, Message<T::Id>> = if column.is_sortable() {
            button(label)
                .on_press(Message::Sort(column.key().to_string()))
                .padding(0.0)
                .style(button::text)
                .into()
        } else {
            label.into()
        };

        container(content)
            .width(Length::FillPortion(1))
            .padding(CELL_PADDING)
            .align_x(column.alignment())
            .into()
    }

    fn body_row(&self, row: &T) -> Element<'_, Message<T::Id>> {
        let id = row.id();
        let mut cells = Row::new().width(Length::Fill);

        if self.is_selectable() {
            let toggle_id = id.clone();
            let select = checkbox(self.is_selected(&id))
                .on_toggle(move |_| Message::ToggleRow(toggle_id.clone()));
            cells = cells.push(container(select).width(Length::Fixed(CHECKBOX_WIDTH)));
        }

        for column in self.columns() {
            cells = cells.push(
                container(text(column.text(row)).size(TEXT_SIZE))
                    .width(Length::FillPortion(1))
                    .padding(CELL_PADDING)
                    .align_x(column.alignment()),
            );
        }

        mouse_area(cells).on_press(Message::RowClicked(id)).into()
    }
}
