use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::algebra::{force_polygon_vertices, Line2};

/// A force together with the force-polygon vertex where it starts once the
/// forces are chained head-to-tail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Station {
    pub force: Line2,
    pub vertex: Vector2<f64>,
}

/// Force polygon as explicit (force, vertex) pairs plus the closing vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct ForcePolygon {
    pub stations: Vec<Station>,
    /// Tip of the last chained force (vertex N+1).
    pub closing: Vector2<f64>,
}

impl ForcePolygon {
    /// `None` for an empty force list.
    pub fn new(forces: &[Line2]) -> Option<Self> {
        let mut vertices = force_polygon_vertices(forces);
        let closing = vertices.pop()?;
        let stations = forces
            .iter()
            .zip(vertices)
            .map(|(force, vertex)| Station {
                force: *force,
                vertex,
            })
            .collect();
        Some(Self { stations, closing })
    }
}

/// Everything one orientation of the construction produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    /// Vector sum of the forces, still anchored at F1's start.
    pub resultant: Line2,
    pub pole: Vector2<f64>,
    /// S1 after being slid onto F1's extension.
    pub first_ray: Line2,
    /// S(N+1) after being slid onto the last running intersection.
    pub closing_ray: Line2,
    /// Intersection of `first_ray` and `closing_ray` (on the resultant's line of action).
    pub point: Vector2<f64>,
}
