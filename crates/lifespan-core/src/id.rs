//! Strongly-typed instance identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`InstanceId`] allocation.
static INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-object identifier for a buffer.
///
/// Allocated from a monotonic atomic counter via [`InstanceId::next`].
/// Two distinct buffers always have different IDs, even when one is dropped
/// and the next is allocated at the same address. A derived buffer shares
/// the ID of the base it wraps, so every notification about one object
/// carries the same ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
