//! Shared message queue
//!
//! The consumer-visible buffer a memory sink writes into. The queue is a
//! cloneable handle: the consumer creates it, keeps a clone for reading,
//! and hands a clone to the sink. Mutation is crate-private, so the sink
//! is the only writer and every consumer clone is a read-only view.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// Cloneable handle to an ordered, shared message buffer
///
/// Messages are stored oldest first. Readers and the writing sink
/// synchronize on one internal lock, so a reader never observes the
/// buffer mid-update.
#[derive(Debug, Clone, Default)]
pub struct MessageQueue {
    inner: Arc<Mutex<VecDeque<String>>>,
}

impl MessageQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with space reserved for `capacity` messages
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Number of buffered messages
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy the current contents, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.lock().iter().cloned().collect()
    }

    /// Lock the underlying buffer for sink-side mutation
    ///
    /// The writing sink holds this guard across append and trim, which is
    /// what keeps the retention invariant visible to readers at every
    /// point.
    pub(crate) fn lock_inner(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.inner.lock()
    }
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;
