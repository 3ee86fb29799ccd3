// SPDX-License-Identifier: MPL-2.0
//! View rendering for the snackbar surface.
//!
//! The surface is a rounded rectangle anchored near the bottom of the
//! viewport, horizontally centered, holding the message text and an optional
//! right-aligned action button. The whole surface is alpha-multiplied by the
//! state machine's current opacity so fades apply uniformly to background,
//! text, and shadow.

use super::state::{Message, State};
use super::style::Style;
use crate::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};

/// Renders the snackbar overlay for `state`.
///
/// While hidden this returns an empty element that reserves no layout space,
/// so it can be stacked unconditionally over the main content.
pub fn view<M>(state: &State<M>, viewport_width: f32) -> Element<'_, Message> {
    if !state.is_visible() {
        return hidden();
    }
    let Some(content) = state.content() else {
        return hidden();
    };

    let style = content.effective_style();
    let surface_opacity = state.opacity();

    let message = Text::new(content.text())
        .size(typography::BODY_LG)
        .style(move |_: &Theme| text::Style {
            color: Some(faded(style.message_color, surface_opacity)),
        });

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(label) = content.action_text() {
        let action_label = Text::new(label.to_owned())
            .size(typography::BODY_LG)
            .style(move |_: &Theme| text::Style {
                color: Some(faded(style.action_color, surface_opacity)),
            });

        // Pressing the action dispatches the caller's message; it does not
        // dismiss the snackbar.
        let action = button(action_label)
            .on_press(Message::ActionPressed)
            .padding(spacing::XXS)
            .style(action_button_style);

        row = row.push(action);
    }

    // A zero-height strut guarantees the minimum surface width; Iced
    // containers only cap the maximum.
    let min_content_width =
        (sizing::SNACKBAR_MIN_WIDTH - 2.0 * sizing::SNACKBAR_PADDING_H).max(0.0);
    let body = Column::new()
        .push(row)
        .push(Space::new().width(min_content_width).height(0.0));

    let width_cap =
        (viewport_width - 2.0 * sizing::SNACKBAR_MARGIN).max(sizing::SNACKBAR_MIN_WIDTH);

    let mut surface = Container::new(body)
        .max_width(width_cap)
        .padding(Padding::from([
            sizing::SNACKBAR_PADDING_V,
            sizing::SNACKBAR_PADDING_H,
        ]))
        .style(move |_: &Theme| surface_style(&style, surface_opacity));

    if let Some(id) = state.test_id() {
        surface = surface.id(id.to_owned());
    }

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            bottom: sizing::SNACKBAR_BOTTOM_OFFSET,
            ..Padding::ZERO
        })
        .into()
}

/// Empty element that takes no space while the snackbar is hidden.
fn hidden<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Multiplies a color's alpha by the surface opacity.
fn faded(color: Color, surface_opacity: f32) -> Color {
    Color {
        a: color.a * surface_opacity,
        ..color
    }
}

/// Style for the snackbar surface container.
fn surface_style(style: &Style, surface_opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(style.background, surface_opacity))),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: style.radius.into(),
        },
        shadow: Shadow {
            color: faded(style.shadow.color, surface_opacity),
            ..style.shadow
        },
        text_color: Some(faded(style.message_color, surface_opacity)),
        ..Default::default()
    }
}

/// Style for the action button: bare label, subtle overlay on hover/press.
fn action_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;

    let overlay = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: overlay(opacity::OVERLAY_SUBTLE),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: overlay(opacity::OVERLAY_MEDIUM),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
