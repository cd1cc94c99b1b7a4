use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::algebra::{GeomCfg, Line2, Rect2};
use crate::error::CalcError;

/// Fixed parameters of the two-orientation construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalcCfg {
    /// How far F1 is extended (as a multiple of itself) to seat the first ray.
    pub extend_multiplier: f64,
    /// Turn applied to every force for the second orientation (degrees, screen CCW).
    pub turn_deg: f64,
    /// Padding added on every side of the result bounds (pixels).
    pub bound_margin: f64,
    #[serde(default)]
    pub geom: GeomCfg,
}

impl Default for CalcCfg {
    fn default() -> Self {
        Self {
            extend_multiplier: 5.0,
            turn_deg: 30.0,
            bound_margin: 40.0,
            geom: GeomCfg::default(),
        }
    }
}

/// Ordered, non-empty list of finite, non-zero force vectors (one per tooth).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForceSystem(Vec<Line2>);

impl ForceSystem {
    pub fn new(forces: Vec<Line2>) -> Result<Self, CalcError> {
        if forces.is_empty() {
            return Err(CalcError::invalid("force vector list is empty"));
        }
        if let Some(i) = forces.iter().position(|f| !f.is_finite()) {
            return Err(CalcError::invalid(format!(
                "force {} has non-finite coordinates",
                i + 1
            )));
        }
        if let Some(i) = forces.iter().position(|f| f.length() == 0.0) {
            return Err(CalcError::invalid(format!("force {} has zero length", i + 1)));
        }
        Ok(Self(forces))
    }

    #[inline]
    pub fn forces(&self) -> &[Line2] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the system holds no forces; never the case after `new`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Line2>> for ForceSystem {
    type Error = CalcError;

    fn try_from(forces: Vec<Line2>) -> Result<Self, Self::Error> {
        Self::new(forces)
    }
}

impl<'de> Deserialize<'de> for ForceSystem {
    fn deserialize<D: serde::Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let forces = Vec::<Line2>::deserialize(de)?;
        Self::new(forces).map_err(serde::de::Error::custom)
    }
}

/// Dental arch outline as a polyline; only its bounding box is used here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArcPath {
    pub points: Vec<Vector2<f64>>,
}

impl ArcPath {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn bounds(&self) -> Rect2 {
        Rect2::from_points(self.points.iter().copied())
    }
}

/// Output of one calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Vector sum of the forces, starting at the point of application.
    pub resultant: Line2,
    /// Wire name `pointGr` is kept for hosts that store it under that key.
    #[serde(rename = "pointGr")]
    pub point_of_application: Vector2<f64>,
    /// Turned F1, turned S1 and the placed turned resultant, in that order.
    pub debug_rays: Vec<Line2>,
    pub result_bounds: Rect2,
}
