//! Demonstration sequences for the lifespan workspace.
//!
//! Each program's fixed sequence lives here as a library function writing
//! to a caller-supplied sink or writer, so the exact transcripts can be
//! asserted in tests. The binaries under `src/bin/` run them against
//! standard output.
//!
//! Run with:
//!   cargo run -p lifespan-demo --bin destructors
//!   cargo run -p lifespan-demo --bin polymorphism

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod destructors;
pub mod error;
pub mod logging;
pub mod polymorphism;

pub use error::DemoError;
