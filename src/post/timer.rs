// SPDX-License-Identifier: MPL-2.0
//! Per-item dismiss timers.
//!
//! A timer is a one-shot deadline. Firing and cancelling both clear the
//! entry, so cancelling after a timer already fired is a harmless no-op.
//! A paused entry keeps the item's bookkeeping while the user interacts
//! with it; it never fires.

use crate::domain::ItemId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTimer {
    Scheduled { deadline: Instant },
    Paused,
}

#[derive(Debug, Default)]
pub struct TimerTable {
    entries: HashMap<ItemId, DismissTimer>,
}

impl TimerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules (or reschedules) the dismissal of `id` at `now + after`.
    ///
    /// A delay too long to be represented as a deadline never fires: any
    /// previous entry is dropped and nothing is scheduled.
    pub fn schedule(&mut self, id: ItemId, now: Instant, after: Duration) {
        let Some(deadline) = now.checked_add(after) else {
            log::debug!("dismiss delay {after:?} of item {id} is out of range, never firing");
            self.entries.remove(&id);
            return;
        };
        log::trace!("dismiss timer for item {id} set to {after:?}");
        self.entries
            .insert(id, DismissTimer::Scheduled { deadline });
    }

    /// Stops a scheduled timer from firing but keeps its entry.
    pub fn pause(&mut self, id: ItemId) {
        if let Some(timer) = self.entries.get_mut(&id) {
            log::trace!("dismiss timer for item {id} paused");
            *timer = DismissTimer::Paused;
        }
    }

    /// Cancels and clears the timer of `id`, if any.
    pub fn cancel(&mut self, id: ItemId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Removes and returns every timer due at `now`, earliest deadline first.
    pub fn take_expired(&mut self, now: Instant) -> Vec<ItemId> {
        let mut due: Vec<(Instant, ItemId)> = self
            .entries
            .iter()
            .filter_map(|(id, timer)| match timer {
                DismissTimer::Scheduled { deadline } if *deadline <= now => Some((*deadline, *id)),
                _ => None,
            })
            .collect();
        due.sort();

        for (_, id) in &due {
            self.entries.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<DismissTimer> {
        self.entries.get(&id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_only_once_deadline_is_reached() {
        let mut table = TimerTable::new();
        let start = Instant::now();
        let id = ItemId::new();
        table.schedule(id, start, Duration::from_secs(3));

        assert!(table
            .take_expired(start + Duration::from_millis(2999))
            .is_empty());
        assert_eq!(table.take_expired(start + Duration::from_secs(3)), vec![id]);
        assert!(table.is_empty());
        assert!(table.take_expired(start + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn expired_timers_come_out_earliest_first() {
        let mut table = TimerTable::new();
        let start = Instant::now();
        let late = ItemId::new();
        let early = ItemId::new();
        table.schedule(late, start, Duration::from_secs(2));
        table.schedule(early, start, Duration::from_secs(1));

        assert_eq!(
            table.take_expired(start + Duration::from_secs(5)),
            vec![early, late]
        );
    }

    #[test]
    fn paused_timer_keeps_entry_but_never_fires() {
        let mut table = TimerTable::new();
        let start = Instant::now();
        let id = ItemId::new();
        table.schedule(id, start, Duration::from_secs(1));
        table.pause(id);

        assert!(table.take_expired(start + Duration::from_secs(60)).is_empty());
        assert_eq!(table.get(id), Some(DismissTimer::Paused));
    }

    #[test]
    fn pause_without_entry_creates_nothing() {
        let mut table = TimerTable::new();
        table.pause(ItemId::new());
        assert!(table.is_empty());
    }

    #[test]
    fn unrepresentable_deadline_is_never_scheduled() {
        let mut table = TimerTable::new();
        let start = Instant::now();
        let id = ItemId::new();
        table.schedule(id, start, Duration::from_secs(1));

        table.schedule(id, start, Duration::MAX);

        assert!(!table.contains(id));
        assert!(table.take_expired(start + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut table = TimerTable::new();
        let id = ItemId::new();
        table.schedule(id, Instant::now(), Duration::from_secs(1));

        assert!(table.cancel(id));
        assert!(!table.cancel(id));
        assert!(!table.contains(id));
    }
}
