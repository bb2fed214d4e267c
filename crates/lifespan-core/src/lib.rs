//! Core types and traits for the lifespan workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the buffer and demo crates: instance identifiers,
//! lifecycle events, the [`EventSink`] trait through which those events are
//! observed, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod id;
pub mod sink;

pub use error::BufferError;
pub use event::{BufferKind, LifecycleEvent, Phase};
pub use id::InstanceId;
pub use sink::{ChannelSink, ConsoleSink, EventSink, NullSink, SharedSink};
