//! Indexed Priority Queue for Rust
//!
//! This crate provides a binary min-heap priority queue whose elements can
//! have their priorities changed after insertion. A hash index from each
//! value to its position in the heap gives O(1) lookup, so the
//! decrease-key/increase-key step needed by Dijkstra's shortest path and A*
//! search costs O(log n) instead of a linear scan.
//!
//! # Features
//!
//! - **`IndexedPriorityQueue`**: O(log n) insert, pop, and priority update; O(1) peek and membership
//! - **`SyncIndexedPriorityQueue`** (feature `sync`): the same queue behind a single `parking_lot` mutex
//!
//! Values are distinct. Inserting a value that is already queued is ignored,
//! updating a value that is not queued is ignored, and popping an empty queue
//! returns [`QueueError::EmptyQueue`].
//!
//! # Example
//!
//! ```rust
//! use indexed_priority_queue::{IndexedPriorityQueue, QueueError};
//!
//! let mut queue = IndexedPriorityQueue::new();
//! queue.insert("foo", 3.0);
//! queue.insert("bar", 4.0);
//! queue.update_priority("bar", 2.0);
//!
//! assert_eq!(queue.pop(), Ok(("bar", 2.0)));
//! assert_eq!(queue.pop(), Ok(("foo", 3.0)));
//! assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
//! ```

pub mod error;
pub mod queue;
#[cfg(feature = "sync")]
pub mod sync;

pub use error::QueueError;
pub use queue::{DefaultHashBuilder, IndexedPriorityQueue};
