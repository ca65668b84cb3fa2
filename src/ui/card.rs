// SPDX-License-Identifier: MPL-2.0
//! Rendering of a single posted item.
//!
//! Every card fades with its `visibility` (0.0 hidden, 1.0 shown), which
//! the surface drives during show and hide animations and the pan gesture
//! lowers while the card is dragged.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::item::{Content, PostItem};
use super::message::{BadgeMessage, Message};
use super::stack::Input;
use iced::widget::image::{Handle, Image};
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Shadow, Theme};

/// Renders `item` at the given visibility.
pub fn view(item: &PostItem, visibility: f32) -> Element<'_, Input> {
    let visibility = visibility.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
    match &item.content {
        Content::Message(message) => message_card(message, visibility),
        Content::Badge(badge) => badge_card(badge, visibility),
        Content::Text(line) => text_card(line, visibility),
    }
}

/// Visibility of a card dragged by `offset` pixels.
#[must_use]
pub fn pan_fade(offset: f32) -> f32 {
    (1.0 - offset.abs() / sizing::PAN_FADE_DISTANCE).clamp(0.0, 1.0)
}

fn message_card(message: &Message, visibility: f32) -> Element<'_, Input> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if let Some(handle) = &message.left_image {
        row = row.push(picture(handle, sizing::IMAGE_MD, visibility));
    }
    row = row.push(
        Container::new(titles(
            &message.title,
            message.subtitle.as_deref(),
            typography::BODY_LG,
            None,
            visibility,
        ))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left),
    );
    if let Some(handle) = &message.right_image {
        row = row.push(picture(handle, sizing::IMAGE_MD, visibility));
    }

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| message_style(theme, visibility))
        .into()
}

fn badge_card(badge: &BadgeMessage, visibility: f32) -> Element<'_, Input> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    if let Some(handle) = &badge.image {
        row = row.push(picture(handle, sizing::IMAGE_SM, visibility));
    }
    row = row.push(titles(
        &badge.title,
        badge.subtitle.as_deref(),
        typography::BODY,
        Some(palette::WHITE),
        visibility,
    ));

    let fill = badge.fill_color;
    Container::new(row)
        .padding([spacing::XXS, spacing::SM])
        .style(move |_theme: &Theme| filled_style(fill, radius::FULL, visibility))
        .into()
}

fn text_card(line: &str, visibility: f32) -> Element<'_, Input> {
    let label = Text::new(line)
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(palette::WHITE, visibility)),
        });

    Container::new(label)
        .padding([spacing::XS, spacing::MD])
        .max_width(sizing::TOAST_WIDTH)
        .style(move |_theme: &Theme| filled_style(palette::GRAY_700, radius::SM, visibility))
        .into()
}

fn titles<'a>(
    title: &'a str,
    subtitle: Option<&'a str>,
    size: f32,
    color: Option<Color>,
    visibility: f32,
) -> Column<'a, Input> {
    let mut column = Column::new().spacing(spacing::XXS).push(
        Text::new(title)
            .size(size)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(color.unwrap_or(theme.palette().text), visibility)),
            }),
    );
    if let Some(subtitle) = subtitle {
        column = column.push(Text::new(subtitle).size(typography::BODY_SM).style(
            move |theme: &Theme| text::Style {
                color: Some(faded(
                    color.unwrap_or(theme.extended_palette().background.strong.text),
                    visibility,
                )),
            },
        ));
    }
    column
}

fn picture(handle: &Handle, size: f32, visibility: f32) -> Image<Handle> {
    Image::new(handle.clone())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .opacity(visibility)
}

fn faded(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

fn faded_shadow(visibility: f32) -> Shadow {
    Shadow {
        color: faded(
            Color {
                a: opacity::SHADOW,
                ..shadow::MD.color
            },
            visibility,
        ),
        ..shadow::MD
    }
}

/// Style of message cards: themed background with a subtle border.
fn message_style(theme: &Theme, visibility: f32) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(background, visibility))),
        border: iced::Border {
            color: faded(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                },
                visibility,
            ),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: faded_shadow(visibility),
        text_color: Some(faded(theme.palette().text, visibility)),
        ..Default::default()
    }
}

/// Style of badge and text cards: solid fill, white text.
fn filled_style(fill: Color, corner: f32, visibility: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(fill, visibility))),
        border: iced::Border {
            radius: corner.into(),
            ..Default::default()
        },
        shadow: faded_shadow(visibility),
        text_color: Some(faded(palette::WHITE, visibility)),
        ..Default::default()
    }
}
