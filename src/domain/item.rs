// SPDX-License-Identifier: MPL-2.0
//! Identity of postable items.
//!
//! Every postable item carries an opaque [`ItemId`] assigned at creation.
//! Timer and gesture bookkeeping is keyed by that token, never by the
//! item's own value or rendering state.

use std::fmt;

/// Stable, opaque identity token of a postable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates a new unique item ID.
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything that can be posted onto a [`crate::post::PostManager`].
///
/// Two values with the same `id()` are the same item as far as the manager
/// is concerned, whatever their contents.
pub trait Postable {
    fn id(&self) -> ItemId;
}

/// A bare identity is the simplest postable item: useful for hosts that keep
/// their visual state elsewhere and only need the orchestration.
impl Postable for ItemId {
    fn id(&self) -> ItemId {
        *self
    }
}
