//! Axis-aligned rectangle.

use crate::shape::Shape;

/// A rectangle with a width and a height.
///
/// Dimensions are not validated: zero or negative values are accepted and
/// yield a zero or non-positive area.
///
/// # Examples
///
/// ```
/// use lifespan_shape::{Rectangle, Shape};
///
/// let r = Rectangle::new(2.0, 6.0);
/// assert_eq!(r.area(), 12.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Create a rectangle.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f32 {
        self.width * self.height
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }
}
