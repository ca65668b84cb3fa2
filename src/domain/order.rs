// SPDX-License-Identifier: MPL-2.0
//! Direction in which posted items are stacked and swiped away.

use serde::{Deserialize, Serialize};

/// How posted items are ordered, and therefore which pan direction dismisses.
///
/// - `TopToBottom`: new items are appended below the previous ones and the
///   user pans *up* to dismiss.
/// - `BottomToTop`: new items are inserted above the previous ones and the
///   user pans *down* to dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    TopToBottom,
    BottomToTop,
}

impl Order {
    /// The opposite direction.
    #[must_use]
    pub fn switched(self) -> Self {
        match self {
            Order::TopToBottom => Order::BottomToTop,
            Order::BottomToTop => Order::TopToBottom,
        }
    }

    /// Clamps a vertical pan translation so an item can only move in its
    /// dismiss direction, never past its resting position the other way.
    #[must_use]
    pub fn clamp_translation(self, translation: f32) -> f32 {
        match self {
            Order::TopToBottom => translation.min(0.0),
            Order::BottomToTop => translation.max(0.0),
        }
    }
}
