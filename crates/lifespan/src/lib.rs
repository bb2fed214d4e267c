//! Lifespan: deterministic buffer lifetimes and runtime shape dispatch.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the lifespan sub-crates. For most users, adding `lifespan` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use lifespan::prelude::*;
//!
//! // Collect lifecycle notifications on a channel.
//! let (sink, rx) = ChannelSink::unbounded();
//! let sink: SharedSink = Arc::new(sink);
//!
//! // A derived buffer held through its base capability.
//! let mut buf: Box<dyn Buffer> = Box::new(ExtendedBuffer::new(3, sink.clone()).unwrap());
//! buf.set(1, 7).unwrap();
//! assert_eq!(buf.as_slice(), &[0, 7, 0]);
//! buf.release();
//!
//! let lines: Vec<String> = rx.try_iter().map(|e| e.to_string()).collect();
//! assert_eq!(lines.last().map(String::as_str), Some("Array destroyed"));
//!
//! // Shapes dispatch on their runtime type.
//! let shapes: Vec<Box<dyn Shape>> = vec![
//!     Box::new(Rectangle::new(2.0, 6.0)),
//!     Box::new(Circle::new(5.0)),
//! ];
//! let report: Vec<String> = shapes.iter().map(|s| area_line(s.as_ref())).collect();
//! assert_eq!(report, ["Area: 12", "Area: 78.5397"]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifespan-core` | Instance IDs, lifecycle events, sinks, errors |
//! | [`buffer`] | `lifespan-buffer` | `Buffer` capability, owning and extended buffers |
//! | [`shape`] | `lifespan-shape` | `Shape` capability, rectangle, circle, area reporting |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, sinks, and IDs (`lifespan-core`).
///
/// Contains [`types::LifecycleEvent`], the [`types::EventSink`] trait with
/// its console, channel, and null implementations, and
/// [`types::BufferError`].
pub use lifespan_core as types;

/// Owning buffers (`lifespan-buffer`).
///
/// Provides the [`buffer::Buffer`] capability, [`buffer::OwningBuffer`],
/// [`buffer::ExtendedBuffer`], and [`buffer::BufferConfig`].
pub use lifespan_buffer as buffer;

/// Shapes and area reporting (`lifespan-shape`).
///
/// Provides the [`shape::Shape`] trait, [`shape::Rectangle`],
/// [`shape::Circle`], and [`shape::print_area`].
pub use lifespan_shape as shape;

/// Common imports for typical lifespan usage.
///
/// ```rust
/// use lifespan::prelude::*;
/// ```
pub mod prelude {
    // Core types and sinks
    pub use lifespan_core::{
        BufferError, BufferKind, ChannelSink, ConsoleSink, EventSink, InstanceId, LifecycleEvent,
        NullSink, Phase, SharedSink,
    };

    // Buffers
    pub use lifespan_buffer::{Buffer, BufferConfig, ExtendedBuffer, OwningBuffer};

    // Shapes
    pub use lifespan_shape::{area_line, format_general, print_area, Circle, Rectangle, Shape};
}
