//! Planar vector algebra on directed segments (screen coordinates).
//!
//! Purpose
//! - Give the string-polygon construction a small, stateless toolbox: sums,
//!   scaling, translation, infinite-line intersection, polar construction and
//!   extremal endpoint selection.
//! - Coordinates are image pixels with Y growing downwards. Angles follow the
//!   viewer convention (0° = +X, counter-clockwise on screen), which is why the
//!   polar helpers flip the sign of the Y component.
//!
//! Discipline
//! - `Line2` is a `Copy` value. Every operation returns a new segment; nothing
//!   mutates an endpoint in place.
//!
//! Code cross-refs: `solver::pole`, `resultant::compute_with`

mod ops;
mod types;

pub use ops::{
    angle_of, force_polygon_vertices, inverse_circle_coordinate, left_point, line_from_polar,
    line_intersection, lower_point, midpoint, right_point, scale, sum, sum_all, translate,
    try_line_intersection, upper_point,
};
pub use types::{GeomCfg, Line2, Rect2};
