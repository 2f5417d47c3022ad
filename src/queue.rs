//! Indexed binary min-heap with in-place priority updates
//!
//! [`IndexedPriorityQueue`] pairs an array-backed binary min-heap with a hash
//! map from each queued value to its current position in the heap array. The
//! map makes lookup by value O(1), so a priority can be changed in place and
//! heap order restored in O(log n) without searching the array.
//!
//! Values are distinct: inserting a value that is already queued is ignored
//! (insert-or-ignore). Callers that want insert-or-update check
//! [`contains`](IndexedPriorityQueue::contains) and call
//! [`update_priority`](IndexedPriorityQueue::update_priority) instead.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert`          | O(log n)   |
//! | `pop`             | O(log n)   |
//! | `update_priority` | O(log n)   |
//! | `peek`            | O(1)       |
//! | `contains`        | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_priority_queue::IndexedPriorityQueue;
//!
//! let mut queue = IndexedPriorityQueue::new();
//! queue.insert("a", 3.0);
//! queue.insert("b", 4.0);
//! queue.update_priority("b", 2.0);
//!
//! assert_eq!(queue.pop(), Ok(("b", 2.0)));
//! assert_eq!(queue.pop(), Ok(("a", 3.0)));
//! assert!(queue.pop().is_err());
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap};
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use rustc_hash::FxHasher;
use tracing::trace;

use crate::error::QueueError;

/// Hasher used for the value index unless another is supplied
pub type DefaultHashBuilder = BuildHasherDefault<FxHasher>;

/// One queued element: the value and its current priority.
///
/// The entry's position in the heap array is recorded in the queue's index
/// map, keyed by `value`.
#[derive(Debug, Clone)]
struct HeapEntry<T, P> {
    value: T,
    priority: P,
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// A min-priority queue of distinct values supporting priority updates
///
/// `T` is the queued value and doubles as the lookup key, so it must be
/// `Eq + Hash + Clone`; cloning should be cheap (node ids, small strings).
/// `P` is the priority. Only `PartialOrd` is required so that `f64` can be
/// used directly; ordering of `NaN` priorities is unspecified.
///
/// Equal priorities are popped in no particular order.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T, P = f64, S = DefaultHashBuilder> {
    /// Heap-ordered entries; index 0 holds the minimum
    heap: Vec<HeapEntry<T, P>>,
    /// Maps each queued value to its position in `heap`
    index: HashMap<T, usize, S>,
}

impl<T, P> IndexedPriorityQueue<T, P, DefaultHashBuilder> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty queue with room for `capacity` values before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, P, S> IndexedPriorityQueue<T, P, S> {
    /// Creates an empty queue that hashes values with `hash_builder`
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty queue with the given capacity and hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of queued values
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no values are queued
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the minimum-priority value and its priority without removing it
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|entry| (&entry.value, &entry.priority))
    }

    /// Removes every value from the queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }
}

impl<T, P, S> IndexedPriorityQueue<T, P, S>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
    S: BuildHasher,
{
    /// Returns true if `value` is currently queued
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Returns the current priority of `value`, if it is queued
    pub fn priority<Q>(&self, value: &Q) -> Option<&P>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(value)
            .map(|&position| &self.heap[position].priority)
    }

    /// Inserts `value` with the given priority
    ///
    /// If `value` is already queued nothing happens: its priority is not
    /// changed and no duplicate is added.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, value: T, priority: P) {
        let position = self.heap.len();
        match self.index.entry(value) {
            hash_map::Entry::Occupied(_) => {
                trace!(len = position, "insert ignored, value already queued");
            }
            hash_map::Entry::Vacant(slot) => {
                let value = slot.key().clone();
                slot.insert(position);
                self.heap.push(HeapEntry { value, priority });
                self.sift_up(position);
            }
        }
    }

    /// Removes and returns the minimum-priority value and its priority
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty. The queue is
    /// left empty and remains usable.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Result<(T, P), QueueError> {
        let Some(last) = self.heap.len().checked_sub(1) else {
            trace!("pop on empty queue");
            return Err(QueueError::EmptyQueue);
        };

        if last > 0 {
            self.swap_entries(0, last);
        }
        let entry = self.heap.pop().ok_or(QueueError::EmptyQueue)?;
        self.index.remove(&entry.value);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok((entry.value, entry.priority))
    }

    /// Changes the priority of a queued value and restores heap order
    ///
    /// The new priority may be lower or higher than the old one. If `value`
    /// is not queued this does nothing.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn update_priority<Q>(&mut self, value: &Q, priority: P)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&position) = self.index.get(value) else {
            trace!(len = self.heap.len(), "priority update ignored, value not queued");
            return;
        };

        self.heap[position].priority = priority;
        self.fix(position);
    }

    /// Checks the heap-order and index invariants
    ///
    /// Returns true when every entry's priority is not less than its
    /// parent's, and the index maps exactly the queued values to their
    /// current positions. Runs in O(n).
    pub fn verify_invariants(&self) -> bool {
        if self.heap.len() != self.index.len() {
            return false;
        }

        let ordered = (1..self.heap.len())
            .all(|i| !(self.heap[i].priority < self.heap[parent(i)].priority));
        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(i, entry)| self.index.get(&entry.value) == Some(&i));

        ordered && indexed
    }

    /// Restore heap order at `index` after its priority changed
    fn fix(&mut self, index: usize) {
        if index > 0 && self.heap[index].priority < self.heap[parent(index)].priority {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent_index = parent(index);
            if self.heap[index].priority < self.heap[parent_index].priority {
                self.swap_entries(index, parent_index);
                index = parent_index;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }

            if smallest != index {
                self.swap_entries(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    /// Swap two heap slots, updating both positions in the index
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.record_position(a);
        self.record_position(b);
    }

    #[inline]
    fn record_position(&mut self, position: usize) {
        if let Some(slot) = self.index.get_mut(&self.heap[position].value) {
            *slot = position;
        }
    }
}

impl<T, P, S: Default> Default for IndexedPriorityQueue<T, P, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}
