// SPDX-License-Identifier: MPL-2.0
//! Minimal FIFO container used for pending post requests.

use std::collections::VecDeque;

/// First-in, first-out sequence.
///
/// Dequeuing an empty queue yields `None` and leaves it untouched.
/// Iteration borrows the contents and can be restarted at will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Queue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Appends `element` to the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.elements.push_back(element);
    }

    /// Removes and returns the earliest enqueued element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// The element that would be dequeued next.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.elements.front()
    }

    /// The most recently enqueued element.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.elements.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::collections::vec_deque::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Keeps only the elements matching `keep`, preserving their order.
    /// Returns how many elements were dropped.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(keep);
        before - self.elements.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
