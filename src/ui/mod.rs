// SPDX-License-Identifier: MPL-2.0
//! Iced front-end for the posting core.
//!
//! # Containers
//!
//! - [`MessageStack`] - every posted item shown at once
//! - [`PostView`] - one item at a time, pan to dismiss
//! - [`Toast`] - single text lines popping up from the bottom
//!
//! # Building Blocks
//!
//! - [`message`] - `Message` and `BadgeMessage` payloads
//! - [`item`] - `PostItem`, the postable item rendered by the containers
//! - [`surface`] - `Surface`, the animated presenter
//! - [`poster`] - `Poster` convenience posting
//! - [`card`] - rendering of a single item
//! - [`design_tokens`] - colors, spacing and sizing constants

pub mod card;
pub mod design_tokens;
pub mod item;
pub mod message;
pub mod poster;
pub mod stack;
pub mod surface;

pub use item::{Content, PostItem};
pub use message::{BadgeMessage, Message};
pub use poster::Poster;
pub use stack::{Input, MessageStack, PostView, Toast};
pub use surface::{Phase, Surface};
