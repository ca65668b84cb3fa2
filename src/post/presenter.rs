// SPDX-License-Identifier: MPL-2.0
//! The presentation collaborator of a [`super::PostManager`].
//!
//! A presenter only decides how an item visually appears and disappears.
//! Every `post`/`remove` call hands it a [`Completion`]; the manager's own
//! state transitions happen once that completion is finished, never before.

use crate::domain::ItemId;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Shows and hides posted items.
pub trait Presenter<T> {
    /// Whether `item` may be posted. A `false` silently drops the request.
    fn should_post(&self, _item: &T) -> bool {
        true
    }

    /// Whether `item` may be removed. A `false` aborts the removal.
    fn should_remove(&self, _item: &T) -> bool {
        true
    }

    /// Shows `item`, finishing `done` when the transition is over.
    ///
    /// When `animated` is false, `done` must be finished before returning.
    fn post(&mut self, item: &T, animated: bool, done: Completion);

    /// Hides `item`, finishing `done` when the transition is over.
    ///
    /// When `animated` is false, `done` must be finished before returning.
    fn remove(&mut self, item: &T, animated: bool, done: Completion);
}

/// Which presenter transition a [`Completion`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Post,
    Remove,
}

/// A transition reported as finished by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Finished {
    pub id: ItemId,
    pub transition: Transition,
}

/// Finished transitions waiting to be applied by the manager.
#[derive(Debug, Clone, Default)]
pub(crate) struct Mailbox {
    finished: Rc<RefCell<VecDeque<Finished>>>,
}

impl Mailbox {
    pub fn completion(&self, id: ItemId, transition: Transition) -> Completion {
        Completion {
            id,
            transition,
            mailbox: Some(Rc::clone(&self.finished)),
        }
    }

    pub fn pop(&self) -> Option<Finished> {
        self.finished.borrow_mut().pop_front()
    }

    pub fn clear(&self) {
        self.finished.borrow_mut().clear();
    }
}

/// One-shot completion handle of a presenter transition.
///
/// [`finish`](Self::finish) consumes the handle. A handle dropped without
/// being finished is finished on drop, so the manager always hears back
/// exactly once per transition.
#[derive(Debug)]
#[must_use = "a completion must be finished for the transition to take effect"]
pub struct Completion {
    id: ItemId,
    transition: Transition,
    mailbox: Option<Rc<RefCell<VecDeque<Finished>>>>,
}

impl Completion {
    /// The item whose transition this completion reports.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Reports the transition as finished.
    pub fn finish(mut self) {
        self.deliver();
    }

    fn deliver(&mut self) {
        if let Some(mailbox) = self.mailbox.take() {
            mailbox.borrow_mut().push_back(Finished {
                id: self.id,
                transition: self.transition,
            });
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.mailbox.is_some() {
            log::warn!(
                "{:?} completion of item {} dropped without being finished",
                self.transition,
                self.id
            );
            self.deliver();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_delivers_exactly_once() {
        let mailbox = Mailbox::default();
        let id = ItemId::new();

        mailbox.completion(id, Transition::Post).finish();

        assert_eq!(
            mailbox.pop(),
            Some(Finished {
                id,
                transition: Transition::Post
            })
        );
        assert_eq!(mailbox.pop(), None);
    }

    #[test]
    fn dropping_an_unfinished_completion_still_delivers() {
        let mailbox = Mailbox::default();
        let id = ItemId::new();

        drop(mailbox.completion(id, Transition::Remove));

        assert_eq!(mailbox.pop().map(|f| f.transition), Some(Transition::Remove));
        assert_eq!(mailbox.pop(), None);
    }

    #[test]
    fn deferred_completion_is_delivered_when_finished() {
        let mailbox = Mailbox::default();
        let pending = mailbox.completion(ItemId::new(), Transition::Post);

        assert_eq!(mailbox.pop(), None);
        pending.finish();
        assert!(mailbox.pop().is_some());
    }
}
