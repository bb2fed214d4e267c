//! The core `Shape` trait and `dyn Shape` downcast support.

use std::any::Any;

/// Anything with a computed area.
///
/// Callers hold shapes as `&dyn Shape` or `Box<dyn Shape>`; `area` is
/// resolved against the concrete variant at call time, never the declared
/// type of the handle. The trait itself is never instantiated.
///
/// Areas are single precision to match the reference output.
pub trait Shape: Any + Send + Sync + 'static {
    /// The area of this shape.
    fn area(&self) -> f32;

    /// Variant name, for diagnostics.
    fn name(&self) -> &'static str;
}

impl dyn Shape {
    /// Attempt to downcast a trait object to a concrete shape type.
    pub fn downcast_ref<T: Shape>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
