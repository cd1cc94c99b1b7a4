//! Value types for the planar toolbox.
//!
//! - `GeomCfg`: tolerance for the parallel-line test.
//! - `Line2`: directed segment `p1 → p2`; direction and magnitude come from the delta.
//! - `Rect2`: axis-aligned box with an explicit empty state.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Relative threshold on `|det| / (|a|·|b|)` (the sine of the angle between
    /// two directions) below which lines count as parallel.
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_det: 1e-12 }
    }
}

/// Directed segment from `p1` to `p2` in image space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

impl Line2 {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Vector2::new(x1, y1),
            p2: Vector2::new(x2, y2),
        }
    }

    /// `p2 − p1`.
    #[inline]
    pub fn delta(&self) -> Vector2<f64> {
        self.p2 - self.p1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p1.iter().chain(self.p2.iter()).all(|c| c.is_finite())
    }

    /// Same segment shifted so that `p1` lands on `at`.
    #[inline]
    pub fn with_start_at(&self, at: Vector2<f64>) -> Self {
        Self::new(at, at + self.delta())
    }

    /// Same segment shifted so that `p2` lands on `at`.
    #[inline]
    pub fn with_end_at(&self, at: Vector2<f64>) -> Self {
        Self::new(at - self.delta(), at)
    }

    /// Smallest box holding both endpoints.
    #[inline]
    pub fn bounds(&self) -> Rect2 {
        Rect2::from_points([self.p1, self.p2])
    }
}

/// Axis-aligned rectangle `[min, max]`.
///
/// The empty rectangle has `min = +∞`, `max = −∞`, so it is the identity of `union`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for Rect2 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Rect2 {
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Vector2::repeat(f64::INFINITY),
            max: Vector2::repeat(f64::NEG_INFINITY),
        }
    }

    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    pub fn from_points<I: IntoIterator<Item = Vector2<f64>>>(points: I) -> Self {
        points.into_iter().fold(Self::empty(), |acc, p| Self {
            min: acc.min.inf(&p),
            max: acc.max.sup(&p),
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }

    /// Grow each edge independently to cover `other`; edges never move inwards.
    #[inline]
    pub fn union(&self, other: &Rect2) -> Rect2 {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Pad every side by `margin`. Empty stays empty.
    #[inline]
    pub fn padded(&self, margin: f64) -> Rect2 {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: self.min - Vector2::repeat(margin),
            max: self.max + Vector2::repeat(margin),
        }
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
