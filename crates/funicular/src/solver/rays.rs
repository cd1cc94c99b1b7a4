use nalgebra::Vector2;

use crate::algebra::{midpoint, scale, try_line_intersection, GeomCfg, Line2};

/// Pole O: the start of `resultant` rotated 90° about its midpoint, i.e. at
/// distance `|R|/2` from the midpoint on the perpendicular bisector.
pub fn aux_pole(resultant: &Line2) -> Vector2<f64> {
    let m = midpoint(resultant);
    Vector2::new(
        m.x + (resultant.p1.y - m.y),
        m.y - (resultant.p1.x - m.x),
    )
}

/// Ray S1 from `pole` to F1's start, slid so its far end sits on F1 extended
/// `multiplier` times from its own start.
pub fn place_first_ray(f1: &Line2, pole: Vector2<f64>, multiplier: f64) -> Line2 {
    let tip = scale(f1, multiplier).p2;
    Line2::new(pole, f1.p1).with_end_at(tip)
}

/// Slide the ray `pole → vertex` so it ends on `last`, then cut it with the
/// line of action of `force`. `None` when the two are parallel.
pub fn next_intersection(
    force: &Line2,
    pole: Vector2<f64>,
    vertex: Vector2<f64>,
    last: Vector2<f64>,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let ray = Line2::new(pole, vertex).with_end_at(last);
    try_line_intersection(&ray, force, cfg)
}

/// Closing ray `pole → closing vertex`, slid so it ends on the last running intersection.
#[inline]
pub fn place_closing_ray(closing: Vector2<f64>, pole: Vector2<f64>, last: Vector2<f64>) -> Line2 {
    Line2::new(pole, closing).with_end_at(last)
}
