// SPDX-License-Identifier: MPL-2.0
//! Domain layer - toolkit-independent value types.
//!
//! Nothing in here knows about iced. These types are shared by the posting
//! core ([`crate::post`]) and the iced front-end ([`crate::ui`]).
//!
//! # Modules
//!
//! - [`item`]: item identity ([`ItemId`], [`Postable`])
//! - [`order`]: stacking and swipe direction ([`Order`])
//! - [`animation`]: per-request animation flags ([`PostAnimation`])
//! - [`queue`]: FIFO container ([`Queue`])

pub mod animation;
pub mod item;
pub mod order;
pub mod queue;

pub use animation::PostAnimation;
pub use item::{ItemId, Postable};
pub use order::Order;
pub use queue::Queue;
