//! Error type for queue operations
//!
//! Only one operation on [`IndexedPriorityQueue`](crate::IndexedPriorityQueue)
//! can fail: popping from an empty queue. Inserting a value that is already
//! queued, or updating the priority of a value that is not queued, are silent
//! no-ops rather than errors.

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// `pop` was called on a queue with no elements
    EmptyQueue,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "empty queue"),
        }
    }
}

impl std::error::Error for QueueError {}
