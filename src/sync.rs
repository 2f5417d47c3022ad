//! Mutex-guarded queue for sharing between threads
//!
//! [`IndexedPriorityQueue`] has no internal synchronization. Every operation
//! may touch the whole heap array, so the shared variant takes a single
//! `parking_lot::Mutex` per queue and holds it for the duration of each call.
//!
//! Requires the `sync` feature.
//!
//! # Example
//!
//! ```rust
//! use indexed_priority_queue::sync::SyncIndexedPriorityQueue;
//! use std::sync::Arc;
//!
//! let queue = Arc::new(SyncIndexedPriorityQueue::new());
//! let worker = {
//!     let queue = Arc::clone(&queue);
//!     std::thread::spawn(move || queue.insert(1u32, 0.5))
//! };
//! worker.join().unwrap();
//! assert_eq!(queue.pop(), Ok((1, 0.5)));
//! ```

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use parking_lot::Mutex;

use crate::error::QueueError;
use crate::queue::{DefaultHashBuilder, IndexedPriorityQueue};

/// An [`IndexedPriorityQueue`] behind one lock, usable through `&self`
#[derive(Debug)]
pub struct SyncIndexedPriorityQueue<T, P = f64, S = DefaultHashBuilder> {
    inner: Mutex<IndexedPriorityQueue<T, P, S>>,
}

impl<T, P> SyncIndexedPriorityQueue<T, P, DefaultHashBuilder> {
    /// Creates an empty shared queue
    pub fn new() -> Self {
        Self::from_queue(IndexedPriorityQueue::new())
    }
}

impl<T, P, S> SyncIndexedPriorityQueue<T, P, S> {
    /// Wraps an existing queue
    pub fn from_queue(queue: IndexedPriorityQueue<T, P, S>) -> Self {
        Self {
            inner: Mutex::new(queue),
        }
    }

    /// Returns the number of queued values
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if no values are queued
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Removes every value from the queue
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Consumes the wrapper, returning the unguarded queue
    pub fn into_inner(self) -> IndexedPriorityQueue<T, P, S> {
        self.inner.into_inner()
    }
}

impl<T, P, S: Default> Default for SyncIndexedPriorityQueue<T, P, S> {
    fn default() -> Self {
        Self::from_queue(IndexedPriorityQueue::default())
    }
}

impl<T, P, S> SyncIndexedPriorityQueue<T, P, S>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
    S: BuildHasher,
{
    /// See [`IndexedPriorityQueue::contains`]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(value)
    }

    /// See [`IndexedPriorityQueue::insert`]
    pub fn insert(&self, value: T, priority: P) {
        self.inner.lock().insert(value, priority);
    }

    /// See [`IndexedPriorityQueue::pop`]
    pub fn pop(&self) -> Result<(T, P), QueueError> {
        self.inner.lock().pop()
    }

    /// See [`IndexedPriorityQueue::update_priority`]
    pub fn update_priority<Q>(&self, value: &Q, priority: P)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().update_priority(value, priority);
    }

    /// Inserts `value`, or updates its priority if already queued, under one lock
    pub fn insert_or_update(&self, value: T, priority: P) {
        let mut queue = self.inner.lock();
        if queue.contains(&value) {
            queue.update_priority(&value, priority);
        } else {
            queue.insert(value, priority);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<Q: Send + Sync>() {}

    #[test]
    fn test_is_send_sync() {
        assert_send_sync::<SyncIndexedPriorityQueue<String, f64>>();
    }

    #[test]
    fn test_insert_or_update() {
        let queue = SyncIndexedPriorityQueue::new();
        queue.insert_or_update("a", 4.0);
        queue.insert_or_update("b", 3.0);
        queue.insert_or_update("a", 1.0);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Ok(("a", 1.0)));
    }

    #[test]
    fn test_into_inner() {
        let queue = SyncIndexedPriorityQueue::new();
        queue.insert(3, 3);
        queue.insert(1, 1);

        let mut inner = queue.into_inner();
        assert!(inner.verify_invariants());
        assert_eq!(inner.pop(), Ok((1, 1)));
    }
}
