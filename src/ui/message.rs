// SPDX-License-Identifier: MPL-2.0
//! Payloads the built-in containers know how to render.

use iced::widget::image::Handle;
use iced::Color;

/// A titled message with optional images on either side.
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub title: String,
    pub subtitle: Option<String>,
    pub left_image: Option<Handle>,
    pub right_image: Option<Handle>,
}

impl Message {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn left_image(mut self, image: Handle) -> Self {
        self.left_image = Some(image);
        self
    }

    #[must_use]
    pub fn right_image(mut self, image: Handle) -> Self {
        self.right_image = Some(image);
        self
    }
}

/// A compact, color-filled message.
#[derive(Debug, Clone)]
pub struct BadgeMessage {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<Handle>,
    pub fill_color: Color,
}

impl BadgeMessage {
    pub fn new(title: impl Into<String>, fill_color: Color) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            image: None,
            fill_color,
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: Handle) -> Self {
        self.image = Some(image);
        self
    }
}
