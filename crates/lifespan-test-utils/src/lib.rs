//! Test utilities for lifespan development.
//!
//! Provides [`RecordingSink`], an [`EventSink`] that keeps every lifecycle
//! event in arrival order so tests can assert on construction and release
//! ordering, interleave their own markers, and count storage releases per
//! buffer.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use lifespan_core::{EventSink, InstanceId, LifecycleEvent};
use smallvec::SmallVec;

/// One recorded item: a lifecycle event or a test-supplied marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Event(LifecycleEvent),
    Marker(String),
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Event(event) => write!(f, "{event}"),
            Self::Marker(label) => f.write_str(label),
        }
    }
}

/// Records lifecycle events in order.
///
/// Share it with buffers via [`RecordingSink::shared`]; the returned `Arc`
/// coerces to `SharedSink` at the call site. Call
/// [`mark`](RecordingSink::mark) between operations to pin down where
/// events happened relative to the test's own statements.
#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Entry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh sink behind an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Append a marker line.
    pub fn mark(&self, label: impl Into<String>) {
        self.lock().push(Entry::Marker(label.into()));
    }

    /// Everything recorded so far.
    pub fn entries(&self) -> Vec<Entry> {
        self.lock().clone()
    }

    /// Recorded events, markers skipped.
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Event(event) => Some(*event),
                Entry::Marker(_) => None,
            })
            .collect()
    }

    /// Console rendering of every entry, markers included.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    /// Events for one buffer, in order. Four fit inline: an extended
    /// buffer's two constructions and two releases.
    pub fn history(&self, instance: InstanceId) -> SmallVec<[LifecycleEvent; 4]> {
        self.events()
            .into_iter()
            .filter(|event| event.instance() == instance)
            .collect()
    }

    /// Storage-release count per buffer, in order of first release.
    pub fn storage_releases(&self) -> IndexMap<InstanceId, usize> {
        let mut counts = IndexMap::new();
        for event in self.events() {
            if event.is_storage_release() {
                *counts.entry(event.instance()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// How many times the storage of `instance` was released.
    pub fn storage_release_count(&self, instance: InstanceId) -> usize {
        self.storage_releases()
            .get(&instance)
            .copied()
            .unwrap_or(0)
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &LifecycleEvent) {
        self.lock().push(Entry::Event(*event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifespan_core::BufferKind;

    #[test]
    fn markers_interleave_with_events() {
        let sink = RecordingSink::new();
        let id = InstanceId::next();
        sink.mark("before");
        sink.record(&LifecycleEvent::released(id, BufferKind::Owning));
        sink.mark("after");
        assert_eq!(sink.lines(), vec!["before", "Array destroyed", "after"]);
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn storage_releases_ignore_extended_layer() {
        let sink = RecordingSink::new();
        let id = InstanceId::next();
        sink.record(&LifecycleEvent::released(id, BufferKind::Extended));
        sink.record(&LifecycleEvent::released(id, BufferKind::Owning));
        assert_eq!(sink.storage_release_count(id), 1);
        assert_eq!(sink.history(id).len(), 2);
    }

    #[test]
    fn storage_releases_keep_first_release_order() {
        let sink = RecordingSink::new();
        let a = InstanceId::next();
        let b = InstanceId::next();
        sink.record(&LifecycleEvent::released(b, BufferKind::Owning));
        sink.record(&LifecycleEvent::released(a, BufferKind::Owning));
        let order: Vec<_> = sink.storage_releases().keys().copied().collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn clear_empties_the_log() {
        let sink = RecordingSink::new();
        sink.mark("x");
        sink.clear();
        assert!(sink.entries().is_empty());
    }
}
