//! Clinical read-outs derived from a finished calculation.
//!
//! - Turning tendency: the arch tends to turn away from the side the point of
//!   application falls on, relative to the arch midline `mid_x`.
//! - Projection tendency: anterior teeth tend to project forward when the point
//!   of application lies above (smaller Y than) the front limit line.
//! - `extend_to_y`: dashed prolongation of the resultant drawn on the report.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::algebra::{try_line_intersection, GeomCfg, Line2};
use crate::resultant::CalculationResult;

/// Below this distance (mm) from the midline there is no turning tendency.
pub const TURNING_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turning {
    None,
    Left,
    Right,
}

/// `scale` converts pixels to millimetres for the tolerance check.
pub fn turning_tendency(mid_x: f64, point: Vector2<f64>, scale: f64) -> Turning {
    if (mid_x - point.x).abs() * scale < TURNING_TOLERANCE {
        Turning::None
    } else if point.x >= mid_x {
        Turning::Left
    } else {
        Turning::Right
    }
}

#[inline]
pub fn projection_tendency(front_limit_y: f64, point: Vector2<f64>) -> bool {
    point.y < front_limit_y
}

/// Segment from where `line` crosses the horizontal `y` back to `line.p1`.
/// `None` for a horizontal or zero-length `line`.
pub fn extend_to_y(line: &Line2, y: f64) -> Option<Line2> {
    let horizon = Line2::from_coords(0.0, y, 100.0, y);
    let hit = try_line_intersection(line, &horizon, GeomCfg::default())?;
    Some(Line2::new(hit, line.p1))
}

/// Both tendencies for one result. Missing host inputs leave the entry empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tendencies {
    pub turning: Option<Turning>,
    pub projection: Option<bool>,
}

impl Tendencies {
    pub fn evaluate(
        result: &CalculationResult,
        mid_x: Option<f64>,
        scale: Option<f64>,
        front_limit_y: Option<f64>,
    ) -> Self {
        let point = result.point_of_application;
        Self {
            turning: mid_x.map(|mid| turning_tendency(mid, point, scale.unwrap_or(1.0))),
            projection: front_limit_y.map(|front| projection_tendency(front, point)),
        }
    }
}
