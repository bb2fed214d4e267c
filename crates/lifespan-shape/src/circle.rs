//! Circle with a configurable pi constant.

use crate::shape::Shape;

/// Pi to the precision of the reference output.
///
/// Circle areas computed with this constant reproduce the reference
/// transcript exactly; `Circle::with_pi(r, std::f32::consts::PI)` trades
/// that for accuracy.
#[allow(clippy::approx_constant)]
pub const REFERENCE_PI: f32 = 3.14159;

/// A circle with a radius.
///
/// # Examples
///
/// ```
/// use lifespan_shape::{Circle, Shape};
///
/// let c = Circle::new(5.0);
/// assert!((c.area() - 78.53975).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f32,
    pi: f32,
}

impl Circle {
    /// Create a circle using [`REFERENCE_PI`].
    pub fn new(radius: f32) -> Self {
        Self::with_pi(radius, REFERENCE_PI)
    }

    /// Create a circle using a caller-chosen value of pi.
    pub fn with_pi(radius: f32, pi: f32) -> Self {
        Self { radius, pi }
    }

    /// The radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The pi constant this circle computes with.
    pub fn pi(&self) -> f32 {
        self.pi
    }
}

impl Shape for Circle {
    fn area(&self) -> f32 {
        // Left-to-right, matching the reference evaluation order.
        self.pi * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "Circle"
    }
}
