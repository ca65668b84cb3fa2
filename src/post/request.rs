// SPDX-License-Identifier: MPL-2.0
//! Request to post an item, its lifetime, and how its transitions animate.

use crate::config::PostConfig;
use crate::domain::{ItemId, PostAnimation, Postable};
use std::time::Duration;

/// Normalizes an optional dismiss delay: zero means "never".
#[must_use]
pub fn normalize_dismiss(after: Option<Duration>) -> Option<Duration> {
    after.filter(|d| !d.is_zero())
}

/// Normalizes a dismiss delay given in seconds.
///
/// Negative, zero, NaN and non-representable values all mean "never".
#[must_use]
pub fn normalize_dismiss_secs(secs: Option<f64>) -> Option<Duration> {
    secs.filter(|s| *s > 0.0)
        .and_then(|s| Duration::try_from_secs_f64(s).ok())
        .and_then(|d| normalize_dismiss(Some(d)))
}

/// A postable item bundled with its auto-dismiss delay and animation flags.
#[derive(Debug, Clone)]
pub struct PostRequest<T> {
    item: T,
    dismiss_after: Option<Duration>,
    animation: PostAnimation,
}

impl<T: Postable> PostRequest<T> {
    /// Creates a request that never auto-dismisses and animates both ways.
    pub fn new(item: T) -> Self {
        Self {
            item,
            dismiss_after: crate::config::DEFAULT_DISMISS,
            animation: PostAnimation::default(),
        }
    }

    /// Creates a request using the defaults of `config`.
    pub fn with_config(item: T, config: &PostConfig) -> Self {
        Self {
            item,
            dismiss_after: config.dismiss_after(),
            animation: config.animation,
        }
    }

    /// Sets the auto-dismiss delay. A zero delay means "never".
    #[must_use]
    pub fn dismiss_after(mut self, after: Option<Duration>) -> Self {
        self.dismiss_after = normalize_dismiss(after);
        self
    }

    /// Sets the auto-dismiss delay in seconds. Non-positive values mean "never".
    #[must_use]
    pub fn dismiss_after_secs(mut self, secs: f64) -> Self {
        self.dismiss_after = normalize_dismiss_secs(Some(secs));
        self
    }

    #[must_use]
    pub fn animation(mut self, animation: PostAnimation) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    #[must_use]
    pub fn into_item(self) -> T {
        self.item
    }

    /// The auto-dismiss delay, `None` when the item stays until removed.
    #[must_use]
    pub fn dismiss_delay(&self) -> Option<Duration> {
        self.dismiss_after
    }

    #[must_use]
    pub fn animation_flags(&self) -> PostAnimation {
        self.animation
    }
}
