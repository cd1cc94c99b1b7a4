//! Force-resultant geometry for dental arch force systems.
//!
//! Given the ordered force vectors a clinician draws over an arch image, find
//! the resultant, its point of application and a padded drawing box, using the
//! graphical-statics string (funicular) polygon run at two orientations.
//!
//! Modules, leaf first
//! - `algebra`: stateless vector algebra on directed segments.
//! - `solver`: one string-polygon construction.
//! - `resultant`: two constructions, point of application, bounds, host sink.
//! - `report`: turning/projection tendencies read off a result.
//! - `sample`: replayable synthetic arches for benches and tests.

pub mod algebra;
pub mod error;
pub mod report;
pub mod resultant;
pub mod sample;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algebra::{GeomCfg, Line2, Rect2};
pub use error::CalcError;
pub use nalgebra::Vector2 as Vec2;
pub use resultant::{compute, compute_with, ArcPath, CalcCfg, CalculationResult, ForceSystem};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{GeomCfg, Line2, Rect2};
    pub use crate::error::CalcError;
    pub use crate::report::{Tendencies, Turning};
    pub use crate::resultant::{
        compute, compute_with, store_results, ArcPath, CalcCfg, CalculationModel,
        CalculationResult, ForceSystem, InMemoryModel,
    };
    pub use crate::sample::{draw_arch_forces, ArchCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
