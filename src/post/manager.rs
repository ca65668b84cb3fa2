// SPDX-License-Identifier: MPL-2.0
//! Post/remove orchestration.
//!
//! The `PostManager` decides *when* items are posted and removed; the
//! [`Presenter`] passed into each operation decides *how* they look doing it.
//!
//! Per item the lifecycle is `Queued → Presenting → Active → Removing → Gone`.
//! Three independent triggers funnel into [`PostManager::remove`]: the
//! dismiss timer, a dismiss gesture and an explicit call. The first one to
//! arrive wins and the others become no-ops.
//!
//! In serial mode at most one item is presenting or active at a time and
//! the rest wait in FIFO order; in parallel mode every request is presented
//! immediately.

use super::clock::{Clock, SystemClock};
use super::event::{Observers, PostEvent};
use super::gesture::{GestureEvent, GestureManager, PanPhase};
use super::presenter::{Mailbox, Presenter, Transition};
use super::request::PostRequest;
use super::timer::TimerTable;
use crate::config::PostConfig;
use crate::domain::{ItemId, Postable, Queue};
use crate::error::PostError;
use tokio::sync::mpsc::UnboundedReceiver;

/// Where an item currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// Waiting for the serial slot.
    Queued,
    /// Handed to the presenter; the show transition is running.
    Presenting,
    /// Shown. A dismiss timer may be running.
    Active,
    /// Handed to the presenter for removal; the hide transition is running.
    Removing,
}

/// What `post` did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    /// The presenter refused the item; nothing changed.
    Vetoed,
    /// The serial slot is busy; the request waits in the queue.
    Queued,
    /// The request was handed to the presenter.
    Presented,
}

#[derive(Debug)]
struct Tracked<T> {
    request: PostRequest<T>,
    state: ItemState,
}

pub struct PostManager<T> {
    serial: bool,
    queue: Queue<PostRequest<T>>,
    current: Vec<Tracked<T>>,
    timers: TimerTable,
    gestures: GestureManager,
    tap_to_remove: bool,
    pan_to_remove: bool,
    mailbox: Mailbox,
    observers: Observers,
    clock: Box<dyn Clock>,
}

impl<T: Postable> PostManager<T> {
    /// Creates a manager driven by the system clock.
    #[must_use]
    pub fn new(config: &PostConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a manager reading time from `clock`.
    pub fn with_clock(config: &PostConfig, clock: impl Clock + 'static) -> Self {
        Self {
            serial: config.serial,
            queue: Queue::new(),
            current: Vec::new(),
            timers: TimerTable::new(),
            gestures: GestureManager::new(config.order),
            tap_to_remove: config.tap_to_remove,
            pan_to_remove: config.pan_to_remove,
            mailbox: Mailbox::default(),
            observers: Observers::default(),
            clock: Box::new(clock),
        }
    }

    /// Subscribes to lifecycle events. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> UnboundedReceiver<PostEvent> {
        self.observers.subscribe()
    }

    // ---------------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn is_serial_queue(&self) -> bool {
        self.serial
    }

    /// Whether anything is shown or waiting to be shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.current.is_empty() || !self.queue.is_empty()
    }

    /// Requests currently handed to the presenter, in posting order.
    pub fn current(&self) -> impl Iterator<Item = &PostRequest<T>> {
        self.current.iter().map(|tracked| &tracked.request)
    }

    /// Requests waiting for the serial slot, in FIFO order.
    pub fn queued(&self) -> impl Iterator<Item = &PostRequest<T>> {
        self.queue.iter()
    }

    #[must_use]
    pub fn state(&self, id: ItemId) -> Option<ItemState> {
        if let Some(tracked) = self.tracked(id) {
            return Some(tracked.state);
        }
        self.queue
            .iter()
            .any(|request| request.id() == id)
            .then_some(ItemState::Queued)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.state(id).is_some()
    }

    /// The tracked item with identity `id`, shown or queued.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&T> {
        self.current()
            .chain(self.queued())
            .find(|request| request.id() == id)
            .map(PostRequest::item)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut T> {
        self.current
            .iter_mut()
            .map(|tracked| &mut tracked.request)
            .chain(self.queue.iter_mut())
            .find(|request| request.id() == id)
            .map(PostRequest::item_mut)
    }

    #[must_use]
    pub fn timers(&self) -> &TimerTable {
        &self.timers
    }

    #[must_use]
    pub fn gestures(&self) -> &GestureManager {
        &self.gestures
    }

    /// Gesture registrations, e.g. to add tap-to-remove on a single item.
    pub fn gestures_mut(&mut self) -> &mut GestureManager {
        &mut self.gestures
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    /// Switches between serial and parallel presentation.
    ///
    /// Leaving serial mode posts every queued request immediately, in order.
    pub fn set_serial_queue<P>(&mut self, presenter: &mut P, serial: bool)
    where
        P: Presenter<T> + ?Sized,
    {
        self.serial = serial;
        if serial {
            return;
        }
        while let Some(request) = self.queue.dequeue() {
            self.post_inner(presenter, request);
        }
        self.settle(presenter);
    }

    // ---------------------------------------------------------------------
    // Post
    // ---------------------------------------------------------------------

    /// Posts `request`, or queues it when the serial slot is busy.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::AlreadyTracked`] when the item is already queued
    /// or presented by this manager.
    pub fn post<P>(
        &mut self,
        presenter: &mut P,
        request: PostRequest<T>,
    ) -> Result<PostOutcome, PostError>
    where
        P: Presenter<T> + ?Sized,
    {
        let id = request.id();
        if self.contains(id) {
            log::warn!("refusing to post item {id}: it is already tracked");
            return Err(PostError::AlreadyTracked(id));
        }

        let outcome = self.post_inner(presenter, request);
        self.settle(presenter);
        Ok(outcome)
    }

    fn post_inner<P>(&mut self, presenter: &mut P, request: PostRequest<T>) -> PostOutcome
    where
        P: Presenter<T> + ?Sized,
    {
        let id = request.id();
        if !presenter.should_post(request.item()) {
            log::debug!("presenter vetoed posting item {id}");
            return PostOutcome::Vetoed;
        }

        if self.serial && !self.current.is_empty() {
            log::debug!("queueing item {id} behind {} shown", self.current.len());
            self.queue.enqueue(request);
            return PostOutcome::Queued;
        }

        log::debug!("posting item {id}");
        let animated = request.animation_flags().on_post();
        self.current.push(Tracked {
            request,
            state: ItemState::Presenting,
        });
        self.observers.emit(PostEvent::WillPost(id));

        let done = self.mailbox.completion(id, Transition::Post);
        if let Some(tracked) = self.current.last() {
            presenter.post(tracked.request.item(), animated, done);
        }
        PostOutcome::Presented
    }

    fn complete_post(&mut self, id: ItemId) {
        let now = self.clock.now();
        let Some(tracked) = self.current.iter_mut().find(|t| t.request.id() == id) else {
            log::trace!("ignoring post completion of untracked item {id}");
            return;
        };
        if tracked.state != ItemState::Presenting {
            log::trace!("ignoring stale post completion of item {id}");
            return;
        }
        tracked.state = ItemState::Active;

        if let Some(after) = tracked.request.dismiss_delay() {
            self.timers.schedule(id, now, after);
            if self.gestures.is_panning(id) {
                self.timers.pause(id);
            }
        }
        if self.tap_to_remove {
            self.gestures.add_tap_to_remove(id);
        }
        if self.pan_to_remove {
            self.gestures.add_pan_to_remove(id);
        }

        log::debug!("item {id} is shown");
        self.observers.emit(PostEvent::DidPost(id));
    }

    // ---------------------------------------------------------------------
    // Remove
    // ---------------------------------------------------------------------

    /// Removes `id`. Safe to call redundantly: unknown, already removing
    /// and already removed items are left alone.
    ///
    /// A still-queued item is dropped from the queue without ever reaching
    /// the presenter.
    pub fn remove<P>(&mut self, presenter: &mut P, id: ItemId, animated: bool)
    where
        P: Presenter<T> + ?Sized,
    {
        self.remove_inner(presenter, id, animated);
        self.settle(presenter);
    }

    /// Removes `id` honouring its request's own `ON_REMOVE` flag.
    pub fn remove_request<P>(&mut self, presenter: &mut P, id: ItemId)
    where
        P: Presenter<T> + ?Sized,
    {
        if let Some(animated) = self.animates_remove(id) {
            self.remove(presenter, id, animated);
        }
    }

    /// Removes every presented item, each with its own animation preference.
    pub fn remove_current<P>(&mut self, presenter: &mut P)
    where
        P: Presenter<T> + ?Sized,
    {
        let targets: Vec<(ItemId, bool)> = self
            .current
            .iter()
            .map(|t| (t.request.id(), t.request.animation_flags().on_remove()))
            .collect();
        for (id, animated) in targets {
            self.remove_inner(presenter, id, animated);
        }
        self.settle(presenter);
    }

    fn remove_inner<P>(&mut self, presenter: &mut P, id: ItemId, animated: bool)
    where
        P: Presenter<T> + ?Sized,
    {
        let Some(tracked) = self.current.iter_mut().find(|t| t.request.id() == id) else {
            if self.queue.retain(|request| request.id() != id) > 0 {
                log::debug!("dropped queued item {id}");
            }
            return;
        };
        if tracked.state == ItemState::Removing {
            return;
        }
        // A vetoed item stays up with its timer and gestures intact.
        if !presenter.should_remove(tracked.request.item()) {
            log::debug!("presenter vetoed removing item {id}");
            return;
        }

        log::debug!("removing item {id}");
        tracked.state = ItemState::Removing;
        self.gestures.remove(id);
        self.timers.cancel(id);
        self.observers.emit(PostEvent::WillRemove(id));

        let done = self.mailbox.completion(id, Transition::Remove);
        if let Some(tracked) = self.current.iter().find(|t| t.request.id() == id) {
            presenter.remove(tracked.request.item(), animated, done);
        }
    }

    fn complete_remove<P>(&mut self, presenter: &mut P, id: ItemId)
    where
        P: Presenter<T> + ?Sized,
    {
        let Some(index) = self
            .current
            .iter()
            .position(|t| t.request.id() == id && t.state == ItemState::Removing)
        else {
            log::trace!("ignoring stale remove completion of item {id}");
            return;
        };
        self.current.remove(index);

        log::debug!("item {id} is gone");
        self.observers.emit(PostEvent::DidRemove(id));

        while let Some(next) = self.queue.dequeue() {
            if self.post_inner(presenter, next) != PostOutcome::Vetoed {
                break;
            }
        }
    }

    // ---------------------------------------------------------------------
    // Triggers
    // ---------------------------------------------------------------------

    /// Fires every dismiss timer that is due, then applies finished
    /// transitions. Call it from the host's event-loop tick.
    pub fn tick<P>(&mut self, presenter: &mut P)
    where
        P: Presenter<T> + ?Sized,
    {
        let now = self.clock.now();
        for id in self.timers.take_expired(now) {
            log::debug!("dismiss timer of item {id} fired");
            if let Some(animated) = self.animates_remove(id) {
                self.remove_inner(presenter, id, animated);
            }
        }
        self.settle(presenter);
    }

    /// Applies transitions the presenter finished outside of a manager call,
    /// e.g. at the end of an animation.
    pub fn settle<P>(&mut self, presenter: &mut P)
    where
        P: Presenter<T> + ?Sized,
    {
        while let Some(finished) = self.mailbox.pop() {
            match finished.transition {
                Transition::Post => self.complete_post(finished.id),
                Transition::Remove => self.complete_remove(presenter, finished.id),
            }
        }
    }

    /// A completed tap on a posted item.
    pub fn handle_tap<P>(&mut self, presenter: &mut P, id: ItemId)
    where
        P: Presenter<T> + ?Sized,
    {
        if let Some(event) = self.gestures.tap(id) {
            self.handle_gesture_event(presenter, event);
        }
        self.settle(presenter);
    }

    /// A pan phase on a posted item.
    pub fn handle_pan<P>(&mut self, presenter: &mut P, id: ItemId, phase: PanPhase)
    where
        P: Presenter<T> + ?Sized,
    {
        for event in self.gestures.pan(id, phase) {
            self.handle_gesture_event(presenter, event);
        }
        self.settle(presenter);
    }

    fn handle_gesture_event<P>(&mut self, presenter: &mut P, event: GestureEvent)
    where
        P: Presenter<T> + ?Sized,
    {
        match event {
            GestureEvent::RemoveRequested(id) => {
                if let Some(animated) = self.animates_remove(id) {
                    self.remove_inner(presenter, id, animated);
                }
            }
            // The user is holding the item: stop the countdown.
            GestureEvent::PanStarted(id) => self.timers.pause(id),
            // Interaction resets the countdown rather than resuming it.
            GestureEvent::PanEnded(id) => {
                let delay = self
                    .tracked(id)
                    .filter(|t| t.state == ItemState::Active)
                    .and_then(|t| t.request.dismiss_delay());
                match delay {
                    Some(after) => self.timers.schedule(id, self.clock.now(), after),
                    None => {
                        self.timers.cancel(id);
                    }
                }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Teardown
    // ---------------------------------------------------------------------

    /// Tears everything down without animation: gestures are unregistered,
    /// queued requests are discarded, presented items are removed and every
    /// timer is cancelled. Afterwards the manager is idle.
    pub fn invalidate<P>(&mut self, presenter: &mut P)
    where
        P: Presenter<T> + ?Sized,
    {
        log::debug!(
            "invalidating: {} shown, {} queued",
            self.current.len(),
            self.queue.len()
        );
        self.gestures.invalidate();
        // Emptied first so removals below cannot promote queued requests.
        self.queue = Queue::new();

        let ids: Vec<ItemId> = self.current.iter().map(|t| t.request.id()).collect();
        for id in ids {
            self.remove_inner(presenter, id, false);
        }
        self.settle(presenter);

        self.current.clear();
        self.timers.clear();
        self.mailbox.clear();
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn tracked(&self, id: ItemId) -> Option<&Tracked<T>> {
        self.current.iter().find(|t| t.request.id() == id)
    }

    /// The `ON_REMOVE` preference of a presented item.
    fn animates_remove(&self, id: ItemId) -> Option<bool> {
        self.tracked(id)
            .map(|t| t.request.animation_flags().on_remove())
    }
}

impl<T> std::fmt::Debug for PostManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostManager")
            .field("serial", &self.serial)
            .field("current", &self.current.len())
            .field("queued", &self.queue.len())
            .field("timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}
