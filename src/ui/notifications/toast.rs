// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are small cards with a kind-colored border, an optional bold
//! title, the message, and a close button.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationKind};
use iced::font::Weight;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

const TOAST_WIDTH: f32 = 320.0;
const TOAST_PADDING: f32 = 12.0;
const TOAST_SPACING: f32 = 8.0;

/// Warning accent; the default palette has no warning color.
const WARNING_ACCENT: Color = Color::from_rgb(0.95, 0.62, 0.07);

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let kind = notification.kind();

        let mut body = Column::new().spacing(4.0).width(Length::Fill);
        if let Some(title) = notification.title() {
            body = body.push(Text::new(title).size(14.0).font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }));
        }
        body = body.push(Text::new(notification.message()).size(14.0));

        let dismiss_button = button(text("×").size(16.0))
            .on_press(Message::Dismiss(notification.id()))
            .padding(2.0)
            .style(button::text);

        let content = Row::new()
            .spacing(TOAST_SPACING)
            .align_y(alignment::Vertical::Top)
            .push(body)
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(TOAST_WIDTH))
            .padding(TOAST_PADDING)
            .style(move |theme: &Theme| toast_container_style(theme, kind))
            .into()
    }

    /// Renders every notification stacked in the top-right corner,
    /// oldest first.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        if manager.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts = Column::with_children(manager.list().iter().map(Self::view))
            .spacing(TOAST_SPACING)
            .align_x(alignment::Horizontal::Right);

        container(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(16.0)
            .into()
    }
}

/// Returns the accent color of a notification kind under `theme`.
#[must_use]
pub fn accent_color(theme: &Theme, kind: NotificationKind) -> Color {
    let palette = theme.extended_palette();
    match kind {
        NotificationKind::Success => palette.success.base.color,
        NotificationKind::Error => palette.danger.base.color,
        NotificationKind::Warning => WARNING_ACCENT,
        NotificationKind::Info => palette.primary.base.color,
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, kind: NotificationKind) -> container::Style {
    let background = theme.extended_palette().background.base;

    container::Style {
        background: Some(background.color.into()),
        border: iced::Border {
            color: accent_color(theme, kind),
            width: 2.0,
            radius: 6.0.into(),
        },
        text_color: Some(background.text),
        ..Default::default()
    }
}
