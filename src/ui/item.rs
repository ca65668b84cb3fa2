// SPDX-License-Identifier: MPL-2.0
//! The postable item used by the built-in containers.

use super::message::{BadgeMessage, Message};
use crate::domain::{ItemId, Postable};

/// What a [`PostItem`] shows.
#[derive(Debug, Clone)]
pub enum Content {
    Message(Message),
    Badge(BadgeMessage),
    /// A single line of text, as used by [`super::Toast`].
    Text(String),
}

/// A renderable item with a stable identity.
#[derive(Debug, Clone)]
pub struct PostItem {
    id: ItemId,
    pub content: Content,
}

impl PostItem {
    pub fn new(content: Content) -> Self {
        Self {
            id: ItemId::new(),
            content,
        }
    }

    pub fn message(message: Message) -> Self {
        Self::new(Content::Message(message))
    }

    pub fn badge(badge: BadgeMessage) -> Self {
        Self::new(Content::Badge(badge))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()))
    }

    /// The plain text of a text item.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Postable for PostItem {
    fn id(&self) -> ItemId {
        self.id
    }
}
