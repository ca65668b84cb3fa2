// SPDX-License-Identifier: MPL-2.0
//! Posting core: queueing, presenting, timing out and dismissing items.
//!
//! # Components
//!
//! - [`request`] - `PostRequest`: an item, its dismiss delay and animation flags
//! - [`presenter`] - `Presenter` trait and the one-shot `Completion` handle
//! - [`manager`] - `PostManager`, the post/remove state machine
//! - [`gesture`] - `GestureManager` for tap and pan to dismiss
//! - [`timer`] - `TimerTable` of per-item dismiss deadlines
//! - [`event`] - `PostEvent` lifecycle notifications
//! - [`clock`] - `Clock` time sources
//!
//! # Usage
//!
//! ```
//! use iced_post::config::PostConfig;
//! use iced_post::domain::ItemId;
//! use iced_post::post::{Completion, PostEvent, PostManager, PostRequest, Presenter};
//!
//! struct Instant;
//!
//! impl Presenter<ItemId> for Instant {
//!     fn post(&mut self, _item: &ItemId, _animated: bool, done: Completion) {
//!         done.finish();
//!     }
//!     fn remove(&mut self, _item: &ItemId, _animated: bool, done: Completion) {
//!         done.finish();
//!     }
//! }
//!
//! let mut presenter = Instant;
//! let mut manager = PostManager::new(&PostConfig::default());
//! let mut events = manager.subscribe();
//!
//! let id = ItemId::new();
//! manager.post(&mut presenter, PostRequest::new(id)).unwrap();
//! manager.remove_current(&mut presenter);
//!
//! assert!(!manager.is_active());
//! assert_eq!(events.try_recv().ok(), Some(PostEvent::WillPost(id)));
//! ```

pub mod clock;
pub mod event;
pub mod gesture;
pub mod manager;
pub mod presenter;
pub mod request;
pub mod timer;


pub use clock::{Clock, ManualClock, SystemClock};
pub use event::PostEvent;
pub use gesture::{GestureEvent, GestureManager, PanPhase};
pub use manager::{ItemState, PostManager, PostOutcome};
pub use presenter::{Completion, Presenter, Transition};
pub use request::{normalize_dismiss, normalize_dismiss_secs, PostRequest};
pub use timer::{DismissTimer, TimerTable};
