//! Resultant and point of application of an ordered force system.
//!
//! Purpose
//! - Run the string-polygon construction twice (as drawn, and with every force
//!   turned by a fixed angle about its own start) and intersect the two placed
//!   resultants. The crossing is the point of application; the reported
//!   resultant starts there.
//! - Derive a padded drawing box from the arch outline and the resultant.
//! - Expose a narrow host-facing sink (`CalculationModel`) in place of a
//!   property bag.
//!
//! Code cross-refs: `solver::solve`, `algebra::{line_from_polar, angle_of}`

mod compute;
mod model;
mod types;

pub use compute::{compute, compute_with, result_bounds, turned_system};
pub use model::{store_results, CalculationModel, InMemoryModel};
pub use types::{ArcPath, CalcCfg, CalculationResult, ForceSystem};
