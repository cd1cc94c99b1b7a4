use nalgebra::Vector2;

use super::types::{GeomCfg, Line2};

#[inline]
fn det(top_left: f64, top_right: f64, bot_left: f64, bot_right: f64) -> f64 {
    top_left * bot_right - top_right * bot_left
}

/// Vector sum anchored at `a.p1`: `a.p1 → a.p1 + Δa + Δb`.
#[inline]
pub fn sum(a: &Line2, b: &Line2) -> Line2 {
    Line2::new(a.p1, a.p1 + a.delta() + b.delta())
}

/// Left fold of `sum` starting from `lines[0]`. `None` for an empty slice.
pub fn sum_all(lines: &[Line2]) -> Option<Line2> {
    let (first, rest) = lines.split_first()?;
    Some(rest.iter().fold(*first, |acc, l| sum(&acc, l)))
}

#[inline]
pub fn midpoint(line: &Line2) -> Vector2<f64> {
    line.p1 + line.delta() / 2.0
}

/// Keep `p1`, stretch the delta by `k` (negative flips, `k > 1` extends).
#[inline]
pub fn scale(line: &Line2, k: f64) -> Line2 {
    Line2::new(line.p1, line.p1 + line.delta() * k)
}

/// Shift both endpoints by `(dx, dy)`; length and direction are unchanged.
#[inline]
pub fn translate(line: &Line2, dx: f64, dy: f64) -> Line2 {
    let d = Vector2::new(dx, dy);
    Line2::new(line.p1 + d, line.p2 + d)
}

/// Intersection of the infinite lines through `a` and `b` (2×2 determinant form).
///
/// No guard: parallel or zero-length inputs divide by zero and yield NaN/∞
/// coordinates. Use `try_line_intersection` when that must be detected.
pub fn line_intersection(a: &Line2, b: &Line2) -> Vector2<f64> {
    let (ax, ay) = (a.p1.x - a.p2.x, a.p1.y - a.p2.y);
    let (bx, by) = (b.p1.x - b.p2.x, b.p1.y - b.p2.y);
    let det_a = det(a.p1.x, a.p1.y, a.p2.x, a.p2.y);
    let det_b = det(b.p1.x, b.p1.y, b.p2.x, b.p2.y);
    let div = det(ax, ay, bx, by);
    Vector2::new(det(det_a, ax, det_b, bx) / div, det(det_a, ay, det_b, by) / div)
}

/// Like `line_intersection`, but `None` when the lines are (numerically) parallel,
/// either segment has zero length, or the result is not finite.
pub fn try_line_intersection(a: &Line2, b: &Line2, cfg: GeomCfg) -> Option<Vector2<f64>> {
    let da = a.delta();
    let db = b.delta();
    let norms = da.norm() * db.norm();
    if !norms.is_finite() || norms <= 0.0 {
        return None;
    }
    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() <= cfg.eps_det * norms {
        return None;
    }
    let p = line_intersection(a, b);
    (p.x.is_finite() && p.y.is_finite()).then_some(p)
}

/// Segment of `length` starting at `origin` with direction `angle_deg`.
///
/// 0° points to +X and angles grow counter-clockwise as seen on screen, so the
/// Y component is `−length·sin`.
pub fn line_from_polar(origin: Vector2<f64>, length: f64, angle_deg: f64) -> Line2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Line2::new(origin, origin + Vector2::new(length * cos, -length * sin))
}

/// Screen angle of `line` in degrees, in `[0, 360)`. Inverse of `line_from_polar`.
pub fn angle_of(line: &Line2) -> f64 {
    let d = line.delta();
    let angle = -d.y.atan2(d.x).to_degrees();
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Endpoint further right; ties go to `p2`.
#[inline]
pub fn right_point(line: &Line2) -> Vector2<f64> {
    if line.p1.x > line.p2.x {
        line.p1
    } else {
        line.p2
    }
}

/// Endpoint further left; ties go to `p1`.
#[inline]
pub fn left_point(line: &Line2) -> Vector2<f64> {
    if line.p1.x <= line.p2.x {
        line.p1
    } else {
        line.p2
    }
}

/// Endpoint lower on screen (greater Y); ties go to `p2`.
#[inline]
pub fn lower_point(line: &Line2) -> Vector2<f64> {
    if line.p1.y > line.p2.y {
        line.p1
    } else {
        line.p2
    }
}

/// Endpoint higher on screen (smaller Y); ties go to `p1`.
#[inline]
pub fn upper_point(line: &Line2) -> Vector2<f64> {
    if line.p1.y > line.p2.y {
        line.p2
    } else {
        line.p1
    }
}

/// Solve `x = sqrt(r² − y²)` on a circle centred at the origin.
///
/// NaN when `|known| > radius`; callers pick the sign of the root.
#[inline]
pub fn inverse_circle_coordinate(radius: f64, known: f64) -> f64 {
    (radius.powi(2) - known.powi(2)).sqrt()
}

/// Vertices of the force polygon: forces chained head-to-tail from `forces[0].p1`.
///
/// Always `forces.len() + 1` points for a non-empty slice; empty for an empty one.
pub fn force_polygon_vertices(forces: &[Line2]) -> Vec<Vector2<f64>> {
    let Some(first) = forces.first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(forces.len() + 1);
    let mut tip = first.p1;
    out.push(tip);
    for f in forces {
        tip += f.delta();
        out.push(tip);
    }
    out
}
