// SPDX-License-Identifier: MPL-2.0
//! Animation behaviour of a post request.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Which transitions of a posted item are animated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PostAnimation: u8 {
        /// Animate when the item appears.
        const ON_POST = 1 << 0;
        /// Animate when the item is removed.
        const ON_REMOVE = 1 << 1;
        /// Animate both transitions.
        const BOTH = Self::ON_POST.bits() | Self::ON_REMOVE.bits();
    }
}

impl PostAnimation {
    /// No animation on either transition.
    pub const NONE: Self = Self::empty();

    #[must_use]
    pub fn on_post(self) -> bool {
        self.contains(Self::ON_POST)
    }

    #[must_use]
    pub fn on_remove(self) -> bool {
        self.contains(Self::ON_REMOVE)
    }
}

impl Default for PostAnimation {
    fn default() -> Self {
        Self::BOTH
    }
}
