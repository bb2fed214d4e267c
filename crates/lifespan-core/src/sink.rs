//! Destinations for lifecycle notifications.
//!
//! Buffers report every construction and release to an [`EventSink`]
//! held as a [`SharedSink`]. The sink decides what "observable" means:
//! a console transcript, a channel feeding another component, or nothing.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender};

use crate::event::LifecycleEvent;

/// Receiver of buffer lifecycle notifications.
///
/// `record` is called synchronously from inside buffer construction and
/// release, so implementations must not block and must not panic. Delivery
/// is infallible from the buffer's point of view; a sink that can fail
/// handles the failure itself.
pub trait EventSink: Send + Sync {
    /// Observe one lifecycle event.
    fn record(&self, event: &LifecycleEvent);
}

/// Shared handle to a sink, cloned into every buffer that reports to it.
pub type SharedSink = Arc<dyn EventSink>;

/// Writes each event as one line of text.
///
/// The writer sits behind a mutex so that demo programs can interleave
/// their own lines with lifecycle notifications in a single ordered stream
/// via [`ConsoleSink::write_line`].
pub struct ConsoleSink<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleSink<io::Stdout> {
    /// A sink writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Wrap an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Write one line of non-event output in order with recorded events.
    pub fn write_line(&self, line: impl Display) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{line}")
    }

    /// Inspect the underlying writer.
    pub fn with_output<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        let out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        f(&out)
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> EventSink for ConsoleSink<W> {
    fn record(&self, event: &LifecycleEvent) {
        if let Err(err) = self.write_line(event) {
            tracing::warn!(instance = %event.instance(), error = %err, "failed to write lifecycle event");
        }
    }
}

/// Forwards events over a `crossbeam-channel` sender.
///
/// Events sent after the receiver is dropped are discarded.
#[derive(Clone)]
pub struct ChannelSink {
    tx: Sender<LifecycleEvent>,
}

impl ChannelSink {
    /// Create a sink feeding an existing sender.
    pub fn new(tx: Sender<LifecycleEvent>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end of an unbounded channel.
    pub fn unbounded() -> (Self, Receiver<LifecycleEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn record(&self, event: &LifecycleEvent) {
        if self.tx.send(*event).is_err() {
            tracing::trace!(instance = %event.instance(), "event receiver dropped; discarding");
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NullSink {
    /// A shared handle to a discarding sink.
    pub fn shared() -> SharedSink {
        Arc::new(Self)
    }
}

impl EventSink for NullSink {
    fn record(&self, _event: &LifecycleEvent) {}
}
