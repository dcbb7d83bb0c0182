// SPDX-License-Identifier: MPL-2.0
//! Page navigation for long tables.
//!
//! Pages are 1-based. Long page lists collapse into the first page, the last
//! page and a window around the current one, separated by ellipses.

use crate::domain::RowsPerPage;
use iced::widget::{button, text, Row};
use iced::{alignment, Element};
use std::ops::Range;

/// Page lists longer than this collapse with ellipses.
const MAX_UNCOLLAPSED_PAGES: u32 = 7;
const TEXT_SIZE: f32 = 14.0;

/// One entry of the rendered page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Builds the list of page buttons for `current` out of `total` pages.
#[must_use]
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= MAX_UNCOLLAPSED_PAGES {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

/// Number of pages needed for `rows` rows; never less than one.
#[must_use]
pub fn page_count(rows: usize, per_page: RowsPerPage) -> u32 {
    let pages = rows.div_ceil(per_page.value()).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    GoTo(u32),
}

/// Current page out of a known page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl Pagination {
    /// Creates a pagination state; `current` is clamped to the valid pages.
    #[must_use]
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    /// Pagination over `rows` rows, starting at the first page.
    #[must_use]
    pub fn for_rows(rows: usize, per_page: RowsPerPage) -> Self {
        Self::new(1, page_count(rows, per_page))
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current < self.total
    }

    /// Changes the page count, keeping the current page when it still exists.
    pub fn set_total(&mut self, total: u32) {
        *self = Self::new(self.current, total);
    }

    /// Returns whether the current page changed.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::GoTo(page) => {
                let page = page.clamp(1, self.total);
                let changed = page != self.current;
                self.current = page;
                changed
            }
        }
    }

    /// Index range of the current page within `len` rows.
    #[must_use]
    pub fn page_range(&self, len: usize, per_page: RowsPerPage) -> Range<usize> {
        let per_page = per_page.value();
        let start = (self.current as usize - 1).saturating_mul(per_page).min(len);
        let end = start.saturating_add(per_page).min(len);
        start..end
    }

    /// Previous/next buttons around the page list; empty for a single page.
    pub fn view(&self) -> Element<'_, Message> {
        let mut controls = Row::new()
            .spacing(4.0)
            .align_y(alignment::Vertical::Center);

        if self.total <= 1 {
            return controls.into();
        }

        let previous = button(text("‹").size(TEXT_SIZE))
            .style(button::secondary)
            .on_press_maybe(
                self.can_go_previous()
                    .then(|| Message::GoTo(self.current - 1)),
            );
        controls = controls.push(previous);

        for item in page_items(self.current, self.total) {
            controls = match item {
                PageItem::Page(page) => {
                    let style = if page == self.current {
                        button::primary
                    } else {
                        button::text
                    };
                    controls.push(
                        button(text(page.to_string()).size(TEXT_SIZE))
                            .style(style)
                            .on_press(Message::GoTo(page)),
                    )
                }
                PageItem::Ellipsis => controls.push(text("…").size(TEXT_SIZE)),
            };
        }

        let next = button(text("›").size(TEXT_SIZE))
            .style(button::secondary)
            .on_press_maybe(self.can_go_next().then(|| Message::GoTo(self.current + 1)));
        controls.push(next).into()
    }
}
