// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Queueing**: Serial vs parallel presentation
//! - **Dismiss**: Auto-dismiss delays
//! - **Animation**: Transition timing
//! - **Gestures**: Swipe-to-dismiss threshold

use std::time::Duration;

// ==========================================================================
// Queueing Defaults
// ==========================================================================

/// Whether a bare `PostManager` presents one item at a time.
pub const DEFAULT_SERIAL_QUEUE: bool = true;

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Delay after posting before a generic item is dismissed (`None` = never).
pub const DEFAULT_DISMISS: Option<Duration> = None;

/// Delay after posting before a message or badge message is dismissed.
pub const DEFAULT_MESSAGE_DISMISS: Duration = Duration::from_secs(5);

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of post and remove transitions.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(333);

/// Interval of the host tick driving timers and transitions.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Fraction of an item's height it must be panned past to be dismissed.
pub const PAN_DISMISS_RATIO: f32 = 0.5;

const _: () = {
    assert!(PAN_DISMISS_RATIO > 0.0 && PAN_DISMISS_RATIO <= 1.0);
    assert!(TICK_INTERVAL.as_millis() < ANIMATION_DURATION.as_millis());
};
