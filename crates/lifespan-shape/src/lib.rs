//! Runtime-dispatched shape areas.
//!
//! This crate defines the [`Shape`] trait — a capability with a single
//! computed property, its area — along with two concrete variants and the
//! console reporting used by the demonstration program.
//!
//! # Variants
//!
//! - [`Rectangle`]: `width * height`
//! - [`Circle`]: `pi * radius^2`, with the reference constant
//!   [`REFERENCE_PI`] unless another is supplied
//!
//! # Reporting
//!
//! [`print_area`] reads the area through `&dyn Shape` and writes
//! `Area: <value>`, formatted by [`format_general`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circle;
pub mod format;
pub mod rectangle;
pub mod report;
pub mod shape;

#[cfg(test)]
pub(crate) mod compliance;

pub use circle::{Circle, REFERENCE_PI};
pub use format::{format_general, format_general_with, DEFAULT_PRECISION};
pub use rectangle::Rectangle;
pub use report::{area_line, print_area};
pub use shape::Shape;
