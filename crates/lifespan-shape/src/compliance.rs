//! Shape trait compliance test helpers.
//!
//! These functions verify that a Shape implementation satisfies the
//! invariants required by the trait contract. Reused across the Rectangle
//! and Circle test modules.

use crate::shape::Shape;

/// Relative tolerance for single-precision area comparisons.
const REL_TOL: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= REL_TOL * a.abs().max(b.abs()).max(1.0)
}

/// Assert that the area is finite for ordinary dimensions.
pub fn assert_area_finite(shape: &dyn Shape) {
    let area = shape.area();
    assert!(area.is_finite(), "{} area = {area}, expected finite", shape.name());
}

/// Assert that two calls to `area` return the same value.
pub fn assert_area_deterministic(shape: &dyn Shape) {
    let a = shape.area();
    let b = shape.area();
    assert_eq!(a.to_bits(), b.to_bits(), "{} area is non-deterministic", shape.name());
}

/// Assert that scaling every linear dimension by `k` scales area by `k^2`.
pub fn assert_area_scales_quadratically<S: Shape>(make: impl Fn(f32) -> S) {
    let unit = make(1.0).area();
    for k in [0.5f32, 2.0, 3.0, 10.0] {
        let scaled = make(k).area();
        assert!(
            approx_eq(scaled, unit * k * k),
            "area at scale {k} = {scaled}, expected {}",
            unit * k * k
        );
    }
}

/// Assert that a degenerate (zero-size) shape has zero area.
pub fn assert_zero_scale_zero_area<S: Shape>(make: impl Fn(f32) -> S) {
    let area = make(0.0).area();
    assert_eq!(area, 0.0, "zero-scale area = {area}, expected 0.0");
}

/// Assert that dispatch through `&dyn Shape` reaches the concrete impl.
pub fn assert_dyn_matches_concrete<S: Shape>(shape: &S) {
    let handle: &dyn Shape = shape;
    assert_eq!(handle.area().to_bits(), shape.area().to_bits());
    assert_eq!(handle.name(), shape.name());
    assert!(
        handle.downcast_ref::<S>().is_some(),
        "downcast to {} failed",
        shape.name()
    );
}

/// Run all compliance checks on a shape family parameterised by scale.
pub fn run_full_compliance<S: Shape>(make: impl Fn(f32) -> S) {
    let unit = make(1.0);
    assert_area_finite(&unit);
    assert_area_deterministic(&unit);
    assert_dyn_matches_concrete(&unit);
    assert_area_scales_quadratically(&make);
    assert_zero_scale_zero_area(&make);
}
