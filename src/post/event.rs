// SPDX-License-Identifier: MPL-2.0
//! Lifecycle notifications emitted by a [`super::PostManager`].

use crate::domain::ItemId;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// A lifecycle point of a posted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostEvent {
    /// The item is about to be handed to the presenter.
    WillPost(ItemId),
    /// The presenter finished showing the item.
    DidPost(ItemId),
    /// The item is about to be handed to the presenter for removal.
    WillRemove(ItemId),
    /// The presenter finished hiding the item; it is gone.
    DidRemove(ItemId),
}

impl PostEvent {
    #[must_use]
    pub fn id(&self) -> ItemId {
        match self {
            PostEvent::WillPost(id)
            | PostEvent::DidPost(id)
            | PostEvent::WillRemove(id)
            | PostEvent::DidRemove(id) => *id,
        }
    }
}

/// Fan-out of events to every live subscriber.
///
/// Subscribers whose receiver was dropped are pruned on the next emit.
#[derive(Debug, Default)]
pub(crate) struct Observers {
    senders: Vec<UnboundedSender<PostEvent>>,
}

impl Observers {
    pub fn subscribe(&mut self) -> UnboundedReceiver<PostEvent> {
        let (tx, rx) = unbounded_channel();
        self.senders.push(tx);
        rx
    }

    pub fn emit(&mut self, event: PostEvent) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.senders.len()
    }
}
