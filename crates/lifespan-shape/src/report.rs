//! Console reporting of shape areas.

use std::io::{self, Write};

use crate::format::format_general;
use crate::shape::Shape;

/// The report line for `shape`: `Area: <area>`.
pub fn area_line(shape: &dyn Shape) -> String {
    let area = shape.area();
    tracing::trace!(shape = shape.name(), area, "area dispatched");
    format!("Area: {}", format_general(area))
}

/// Write the report line for `shape` to `out`.
///
/// The area is read through the capability handle, so the concrete
/// variant behind `shape` decides the value.
pub fn print_area<W: Write + ?Sized>(out: &mut W, shape: &dyn Shape) -> io::Result<()> {
    writeln!(out, "{}", area_line(shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Circle, Rectangle};

    #[test]
    fn print_area_follows_runtime_variant() {
        let r = Rectangle::new(2.0, 6.0);
        let c = Circle::new(5.0);
        let mut out = Vec::new();

        let mut shape: &dyn Shape = &r;
        print_area(&mut out, shape).unwrap();
        shape = &c;
        print_area(&mut out, shape).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Area: 12\nArea: 78.5397\n");
    }

    #[test]
    fn area_line_accepts_boxed_shapes() {
        let shape: Box<dyn Shape> = Box::new(Rectangle::new(1.5, 2.0));
        assert_eq!(area_line(shape.as_ref()), "Area: 3");
    }
}
