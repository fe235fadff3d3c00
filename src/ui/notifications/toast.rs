// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! rounded cards with a category-tinted icon, a bold title and an optional
//! description. The whole card is the hit area for tap and drag gestures.

use super::overlay::Message;
use crate::i18n::I18n;
use crate::notifications::{Icon, NotificationEntry};
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::state::DismissDrag;
use iced::font::Weight;
use iced::widget::{container, mouse_area, text, Column, Container, Image, Row, Text};
use iced::{alignment, mouse, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `drag` is the gesture state of this toast, used to fade the card as it
    /// is pulled toward the dismiss threshold.
    pub fn view<'a>(
        entry: &'a NotificationEntry,
        drag: Option<&DismissDrag>,
        dismiss_distance: f32,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let id = entry.id();
        let tint = entry.category().tint().map(|tint| tint.to_color());

        let title = Text::new(i18n.label(entry.title()))
            .size(typography::BODY_LG)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            });

        let mut text_column = Column::new().spacing(spacing::XXS).push(title);
        if let Some(description) = entry.description() {
            text_column = text_column.push(Text::new(i18n.label(description)).size(typography::BODY));
        }

        // Layout: [icon] [title + description]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if let Some(icon) = entry.icon() {
            content = content.push(Self::icon(icon, tint));
        }
        content = content.push(
            Container::new(text_column)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

        let alpha = drag_alpha(drag.map_or(0.0, DismissDrag::offset), dismiss_distance);
        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .height(Length::Shrink)
            .padding([spacing::SM, spacing::MD])
            .style(move |theme: &Theme| toast_container_style(theme, alpha));

        mouse_area(card)
            .on_press(Message::Pressed(id))
            .on_release(Message::Released(id))
            .on_move(move |position| Message::Moved(id, position))
            .on_exit(Message::Exited(id))
            .interaction(mouse::Interaction::Pointer)
            .into()
    }

    /// Renders the leading icon, tinted with the category color or, when the
    /// category has no tint, the theme's primary color.
    fn icon<'a>(icon: &'a Icon, tint: Option<Color>) -> Element<'a, Message> {
        match icon {
            Icon::Symbol(glyph) => Text::new(glyph.as_str())
                .size(sizing::ICON_LG)
                .style(move |theme: &Theme| text::Style {
                    color: Some(tint.unwrap_or(theme.palette().primary)),
                })
                .into(),
            Icon::Image(handle) => Image::new(handle.clone())
                .width(Length::Fixed(sizing::ICON_LG))
                .height(Length::Fixed(sizing::ICON_LG))
                .into(),
        }
    }
}

/// Card opacity for a drag offset: fully opaque at rest, fading toward the
/// dismiss threshold.
fn drag_alpha(offset: f32, dismiss_distance: f32) -> f32 {
    if dismiss_distance <= 0.0 {
        return opacity::OPAQUE;
    }
    let progress = (offset.abs() / dismiss_distance).min(1.0);
    opacity::OPAQUE - progress * opacity::OVERLAY_MEDIUM
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..bg_color
        })),
        border: iced::Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
        ..Default::default()
    }
}
