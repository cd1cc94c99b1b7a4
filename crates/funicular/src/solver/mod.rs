//! Funicular (string) polygon for one orientation of a force system.
//!
//! Purpose
//! - Given ordered forces F1..FN, place an auxiliary pole O off the resultant,
//!   draw rays from O to every force-polygon vertex, slide each ray so it meets
//!   the previous one on the next force's line of action, and intersect the
//!   first and closing rays. That point lies on the resultant's line of action.
//!
//! Layout
//! - `types.rs`: `Station`/`ForcePolygon` (force paired with its vertex) and `Construction`.
//! - `rays.rs`: pole and ray placement primitives.
//! - `construct.rs`: the recurrence and the `solve` entry point.

mod construct;
mod rays;
mod types;

pub use construct::{solve, string_polygon_point};
pub use rays::{aux_pole, next_intersection, place_closing_ray, place_first_ray};
pub use types::{Construction, ForcePolygon, Station};
