// SPDX-License-Identifier: MPL-2.0
//! Tap-to-dismiss and pan-to-dismiss bookkeeping for posted items.
//!
//! The gesture manager turns raw gesture input on a posted item into
//! removal requests, independently of how the item is rendered. Hosts feed
//! it taps and pan phases; it answers with [`GestureEvent`]s and exposes the
//! current pan offset of each item for rendering.

use crate::config::PAN_DISMISS_RATIO;
use crate::domain::{ItemId, Order};
use std::collections::HashMap;

/// A phase of a live pan gesture on an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanPhase {
    Began,
    /// Accumulated vertical translation since the gesture began.
    Changed { translation: f32 },
    /// The finger lifted. `extent` is the item's height.
    Ended { extent: f32 },
    /// The gesture was interrupted; the item always returns to rest.
    Cancelled,
}

/// What the gesture manager asks of its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// The user started panning the item.
    PanStarted(ItemId),
    /// The pan is over, whatever its outcome.
    PanEnded(ItemId),
    /// The user dismissed the item.
    RemoveRequested(ItemId),
}

/// State of a registered pan recognizer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PanRecognizer {
    active: bool,
    offset: f32,
}

/// Registered tap recognizer. Taps carry no state of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TapRecognizer;

#[derive(Debug, Default)]
pub struct GestureManager {
    taps: HashMap<ItemId, TapRecognizer>,
    pans: HashMap<ItemId, PanRecognizer>,
    order: Order,
}

impl GestureManager {
    #[must_use]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    // ---------------------------------------------------------------------
    // Registration
    // ---------------------------------------------------------------------

    pub fn add_tap_to_remove(&mut self, id: ItemId) {
        self.taps.entry(id).or_default();
    }

    pub fn remove_tap_to_remove(&mut self, id: ItemId) {
        self.taps.remove(&id);
    }

    pub fn add_pan_to_remove(&mut self, id: ItemId) {
        self.pans.entry(id).or_default();
    }

    pub fn remove_pan_to_remove(&mut self, id: ItemId) {
        self.pans.remove(&id);
    }

    #[must_use]
    pub fn has_tap_to_remove(&self, id: ItemId) -> bool {
        self.taps.contains_key(&id)
    }

    #[must_use]
    pub fn has_pan_to_remove(&self, id: ItemId) -> bool {
        self.pans.contains_key(&id)
    }

    /// Whether a pan on `id` is in progress.
    #[must_use]
    pub fn is_panning(&self, id: ItemId) -> bool {
        self.pans.get(&id).is_some_and(|pan| pan.active)
    }

    /// Current visual offset of `id` along the pan axis; zero at rest.
    #[must_use]
    pub fn offset(&self, id: ItemId) -> f32 {
        self.pans.get(&id).map_or(0.0, |pan| pan.offset)
    }

    /// Unregisters every recognizer.
    pub fn invalidate(&mut self) {
        self.taps.clear();
        self.pans.clear();
    }

    /// Forgets all bookkeeping for `id`.
    pub fn remove(&mut self, id: ItemId) {
        self.taps.remove(&id);
        self.pans.remove(&id);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty() && self.pans.is_empty()
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// A completed tap on `id`.
    pub fn tap(&mut self, id: ItemId) -> Option<GestureEvent> {
        if !self.taps.contains_key(&id) {
            return None;
        }
        Some(self.request_remove(id))
    }

    /// A pan phase on `id`. Unregistered items produce no events.
    pub fn pan(&mut self, id: ItemId, phase: PanPhase) -> Vec<GestureEvent> {
        let order = self.order;
        let Some(pan) = self.pans.get_mut(&id) else {
            return Vec::new();
        };
        log::trace!("pan on item {id}: {phase:?}");

        if !pan.active && phase != PanPhase::Began {
            log::trace!("ignoring pan {phase:?} on item {id} without a start");
            return Vec::new();
        }

        match phase {
            PanPhase::Began => {
                pan.active = true;
                pan.offset = 0.0;
                vec![GestureEvent::PanStarted(id)]
            }
            PanPhase::Changed { translation } => {
                pan.offset = order.clamp_translation(translation);
                Vec::new()
            }
            PanPhase::Ended { extent } => {
                let dismissed = pan.offset.abs() > extent * PAN_DISMISS_RATIO;
                pan.active = false;
                pan.offset = 0.0;
                if dismissed {
                    vec![self.request_remove(id), GestureEvent::PanEnded(id)]
                } else {
                    vec![GestureEvent::PanEnded(id)]
                }
            }
            PanPhase::Cancelled => {
                pan.active = false;
                pan.offset = 0.0;
                vec![GestureEvent::PanEnded(id)]
            }
        }
    }

    /// Clears the item's bookkeeping before asking for its removal, so a
    /// second gesture cannot fire for the same item.
    fn request_remove(&mut self, id: ItemId) -> GestureEvent {
        self.remove(id);
        GestureEvent::RemoveRequested(id)
    }
}
