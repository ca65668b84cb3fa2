// SPDX-License-Identifier: MPL-2.0
//! Animated presentation surface.
//!
//! A [`Surface`] is the [`Presenter`] used by the built-in containers. It
//! keeps its own copy of every presented item in display order and runs
//! the show/hide fades. Animations start on the first [`Surface::advance`]
//! after they were requested and take [`ANIMATION_DURATION`]; their
//! completion is signalled when they end. Non-animated transitions complete
//! synchronously.

use super::item::PostItem;
use crate::config::ANIMATION_DURATION;
use crate::domain::{ItemId, Order, Postable};
use crate::post::{Completion, Presenter};
use std::time::Instant;

/// Visual phase of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug)]
struct Animation {
    started: Option<Instant>,
    done: Completion,
}

#[derive(Debug)]
struct Slot {
    item: PostItem,
    phase: Phase,
    /// 0.0 fully hidden, 1.0 fully shown.
    visibility: f32,
    animation: Option<Animation>,
}

#[derive(Debug, Default)]
pub struct Surface {
    order: Order,
    slots: Vec<Slot>,
}

impl Surface {
    #[must_use]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            slots: Vec::new(),
        }
    }

    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Changes where new items are inserted. Existing slots keep their place.
    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.slot(id).is_some()
    }

    #[must_use]
    pub fn phase(&self, id: ItemId) -> Option<Phase> {
        self.slot(id).map(|slot| slot.phase)
    }

    #[must_use]
    pub fn visibility(&self, id: ItemId) -> Option<f32> {
        self.slot(id).map(|slot| slot.visibility)
    }

    /// Presented items in display order, with their visibility.
    pub fn items(&self) -> impl Iterator<Item = (&PostItem, f32)> {
        self.slots.iter().map(|slot| (&slot.item, slot.visibility))
    }

    /// Whether any show or hide animation is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slots.iter().any(|slot| slot.animation.is_some())
    }

    /// Steps every running animation to `now`, completing the finished ones.
    pub fn advance(&mut self, now: Instant) {
        for slot in &mut self.slots {
            let Some(animation) = slot.animation.as_mut() else {
                continue;
            };
            let started = *animation.started.get_or_insert(now);
            let progress = (now.saturating_duration_since(started).as_secs_f32()
                / ANIMATION_DURATION.as_secs_f32())
            .min(1.0);

            slot.visibility = match slot.phase {
                Phase::Leaving => 1.0 - progress,
                _ => progress,
            };

            if progress >= 1.0 {
                if let Some(animation) = slot.animation.take() {
                    animation.done.finish();
                }
                if slot.phase == Phase::Entering {
                    slot.phase = Phase::Shown;
                }
            }
        }

        self.slots
            .retain(|slot| !(slot.phase == Phase::Leaving && slot.animation.is_none()));
    }

    /// Drops every slot, completing pending animations.
    pub fn clear(&mut self) {
        for slot in self.slots.drain(..) {
            if let Some(animation) = slot.animation {
                animation.done.finish();
            }
        }
    }

    fn slot(&self, id: ItemId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.item.id() == id)
    }

    fn insert(&mut self, slot: Slot) {
        match self.order {
            Order::TopToBottom => self.slots.push(slot),
            Order::BottomToTop => self.slots.insert(0, slot),
        }
    }
}

impl Presenter<PostItem> for Surface {
    fn should_post(&self, item: &PostItem) -> bool {
        !self.contains(item.id())
    }

    fn should_remove(&self, item: &PostItem) -> bool {
        self.contains(item.id())
    }

    fn post(&mut self, item: &PostItem, animated: bool, done: Completion) {
        if animated {
            self.insert(Slot {
                item: item.clone(),
                phase: Phase::Entering,
                visibility: 0.0,
                animation: Some(Animation {
                    started: None,
                    done,
                }),
            });
        } else {
            self.insert(Slot {
                item: item.clone(),
                phase: Phase::Shown,
                visibility: 1.0,
                animation: None,
            });
            done.finish();
        }
    }

    fn remove(&mut self, item: &PostItem, animated: bool, done: Completion) {
        let id = item.id();
        let Some(index) = self.slots.iter().position(|slot| slot.item.id() == id) else {
            done.finish();
            return;
        };

        // A show still in progress ends where it is.
        if let Some(previous) = self.slots[index].animation.take() {
            previous.done.finish();
        }

        if animated {
            let slot = &mut self.slots[index];
            slot.phase = Phase::Leaving;
            slot.animation = Some(Animation {
                started: None,
                done,
            });
        } else {
            self.slots.remove(index);
            done.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PostConfig;
    use crate::post::{ItemState, ManualClock, PostManager, PostRequest};
    use std::time::Duration;

    fn manager() -> PostManager<PostItem> {
        let config = PostConfig {
            serial: false,
            ..PostConfig::default()
        };
        PostManager::with_clock(&config, ManualClock::new())
    }

    #[test]
    fn animated_post_completes_after_the_animation() {
        let mut surface = Surface::default();
        let mut manager = manager();
        let item = PostItem::text("hi");
        let id = item.id();
        let start = Instant::now();

        manager.post(&mut surface, PostRequest::new(item)).unwrap();
        assert_eq!(surface.phase(id), Some(Phase::Entering));

        surface.advance(start);
        surface.advance(start + ANIMATION_DURATION / 2);
        manager.settle(&mut surface);
        assert_eq!(manager.state(id), Some(ItemState::Presenting));
        assert!(surface.visibility(id).is_some_and(|v| v > 0.0 && v < 1.0));

        surface.advance(start + ANIMATION_DURATION);
        manager.settle(&mut surface);
        assert_eq!(manager.state(id), Some(ItemState::Active));
        assert_eq!(surface.phase(id), Some(Phase::Shown));
        assert_eq!(surface.visibility(id), Some(1.0));
    }

    #[test]
    fn animated_remove_drops_the_slot_at_the_end() {
        let mut surface = Surface::default();
        let mut manager = manager();
        let item = PostItem::text("bye");
        let id = item.id();
        let start = Instant::now();
        manager
            .post(
                &mut surface,
                PostRequest::new(item).animation(crate::domain::PostAnimation::ON_REMOVE),
            )
            .unwrap();

        manager.remove(&mut surface, id, true);
        assert_eq!(surface.phase(id), Some(Phase::Leaving));

        surface.advance(start);
        surface.advance(start + ANIMATION_DURATION + Duration::from_millis(1));
        manager.settle(&mut surface);

        assert!(!surface.contains(id));
        assert_eq!(manager.state(id), None);
    }

    #[test]
    fn non_animated_transitions_are_synchronous() {
        let mut surface = Surface::default();
        let mut manager = manager();
        let item = PostItem::text("now");
        let id = item.id();

        manager
            .post(
                &mut surface,
                PostRequest::new(item).animation(crate::domain::PostAnimation::NONE),
            )
            .unwrap();
        assert_eq!(manager.state(id), Some(ItemState::Active));

        manager.remove(&mut surface, id, false);
        assert!(surface.is_empty());
        assert_eq!(manager.state(id), None);
    }

    #[test]
    fn order_decides_insertion_side() {
        let mut surface = Surface::new(Order::BottomToTop);
        let mut manager = manager();
        let first = PostItem::text("first");
        let second = PostItem::text("second");
        let (a, b) = (first.id(), second.id());

        manager.post(&mut surface, PostRequest::new(first)).unwrap();
        manager.post(&mut surface, PostRequest::new(second)).unwrap();

        let ids: Vec<ItemId> = surface.items().map(|(item, _)| item.id()).collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn clear_completes_pending_animations() {
        let mut surface = Surface::default();
        let mut manager = manager();
        let item = PostItem::text("x");
        let id = item.id();
        manager.post(&mut surface, PostRequest::new(item)).unwrap();

        surface.clear();
        manager.settle(&mut surface);

        assert!(!surface.is_animating());
        assert_eq!(manager.state(id), Some(ItemState::Active));
    }
}
