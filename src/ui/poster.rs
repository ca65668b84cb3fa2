// SPDX-License-Identifier: MPL-2.0
//! The `Poster` role: convenience posting of messages onto a container.

use super::item::PostItem;
use super::message::{BadgeMessage, Message};
use crate::config::DEFAULT_MESSAGE_DISMISS;
use crate::domain::{ItemId, PostAnimation, Postable};
use crate::error::Result;
use crate::post::{PostManager, PostOutcome, PostRequest};
use std::time::Duration;

/// A container owning exactly one [`PostManager`].
///
/// Implementors provide raw posting; message and badge helpers wrap their
/// payload into a [`PostItem`] and return its identity so callers can find
/// it again through [`Poster::item_mut`].
pub trait Poster {
    fn post_manager(&self) -> &PostManager<PostItem>;

    fn post_manager_mut(&mut self) -> &mut PostManager<PostItem>;

    /// Posts a prepared request.
    ///
    /// # Errors
    ///
    /// Fails when the item is already posted on this container.
    fn post(&mut self, request: PostRequest<PostItem>) -> Result<PostOutcome>;

    /// Posts `message` with the default message dismiss delay.
    ///
    /// # Errors
    ///
    /// See [`Poster::post`].
    fn post_message(&mut self, message: Message) -> Result<ItemId> {
        self.post_message_with(
            message,
            Some(DEFAULT_MESSAGE_DISMISS),
            PostAnimation::default(),
        )
    }

    /// Posts `message` with an explicit dismiss delay and animation.
    ///
    /// # Errors
    ///
    /// See [`Poster::post`].
    fn post_message_with(
        &mut self,
        message: Message,
        dismiss_after: Option<Duration>,
        animation: PostAnimation,
    ) -> Result<ItemId> {
        self.post_item(PostItem::message(message), dismiss_after, animation)
    }

    /// Posts `badge` with the default message dismiss delay.
    ///
    /// # Errors
    ///
    /// See [`Poster::post`].
    fn post_badge_message(&mut self, badge: BadgeMessage) -> Result<ItemId> {
        self.post_badge_message_with(
            badge,
            Some(DEFAULT_MESSAGE_DISMISS),
            PostAnimation::default(),
        )
    }

    /// # Errors
    ///
    /// See [`Poster::post`].
    fn post_badge_message_with(
        &mut self,
        badge: BadgeMessage,
        dismiss_after: Option<Duration>,
        animation: PostAnimation,
    ) -> Result<ItemId> {
        self.post_item(PostItem::badge(badge), dismiss_after, animation)
    }

    /// # Errors
    ///
    /// See [`Poster::post`].
    fn post_item(
        &mut self,
        item: PostItem,
        dismiss_after: Option<Duration>,
        animation: PostAnimation,
    ) -> Result<ItemId> {
        let id = item.id();
        let request = PostRequest::new(item)
            .dismiss_after(dismiss_after)
            .animation(animation);
        self.post(request)?;
        Ok(id)
    }

    /// The posted item `id`, for further customization.
    fn item_mut(&mut self, id: ItemId) -> Option<&mut PostItem> {
        self.post_manager_mut().item_mut(id)
    }
}
