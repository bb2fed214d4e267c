//! Owning integer buffers with deterministic, exactly-once release.
//!
//! An [`OwningBuffer`] holds a fixed-length run of `i32` elements. The
//! storage is released exactly once, when the buffer is dropped: at scope
//! exit, through [`OwningBuffer::release`], or when a `Box<dyn Buffer>`
//! holding it is dropped.
//!
//! # Layering
//!
//! ```text
//! ExtendedBuffer
//! └── OwningBuffer (by value)
//!     ├── Vec<i32> (element storage, zero-initialised)
//!     └── SharedSink (lifecycle notifications)
//! ```
//!
//! Construction runs inside-out and release runs outside-in: an
//! [`ExtendedBuffer`] reports its base's construction before its own, and
//! its own release before its base's. Drop glue enforces the release order
//! for every handle type, including `Box<dyn Buffer>`.
//!
//! # Element access
//!
//! [`Buffer::get`] and [`Buffer::set`] are checked and return
//! [`BufferError::IndexOutOfRange`](lifespan_core::BufferError::IndexOutOfRange).
//! The `Index`/`IndexMut` operators follow slice convention and panic on an
//! out-of-range index.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod extended;

// Public re-exports for the primary API surface.
pub use buffer::{Buffer, OwningBuffer};
pub use config::BufferConfig;
pub use extended::ExtendedBuffer;
