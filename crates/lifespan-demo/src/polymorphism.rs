//! Shape dispatch demonstration.
//!
//! Reads areas directly and through a `&dyn Shape` handle that is
//! reassigned from a rectangle to a circle.

use std::io::{self, Write};

use lifespan_shape::{format_general, print_area, Circle, Rectangle, Shape};

/// Run the full sequence, writing every line to `out`.
pub fn run<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let r = Rectangle::new(2.0, 6.0);
    let mut shape: &dyn Shape = &r;

    writeln!(out, "{}", format_general(r.area()))?;
    writeln!(out, "{}", format_general(shape.area()))?;

    let c = Circle::new(5.0);
    shape = &c;

    print_area(out, &r)?;
    print_area(out, &c)?;
    print_area(out, shape)?;
    Ok(())
}
