use nalgebra::Vector2;

use super::compute::compute_with;
use super::types::{ArcPath, CalcCfg, CalculationResult, ForceSystem};
use crate::algebra::{Line2, Rect2};
use crate::error::CalcError;

/// Host-side storage the calculation reads from and writes into.
///
/// Two getters feed the calculation; the four setters are written once each
/// after a successful run and never on failure.
pub trait CalculationModel {
    /// Ordered force vectors, `None` when the host has none stored.
    fn vector_units(&self) -> Option<&[Line2]>;
    fn arc_path(&self) -> Option<&ArcPath>;

    fn set_resultant(&mut self, resultant: Line2);
    fn set_point_gr(&mut self, point: Vector2<f64>);
    fn set_debug_vector_units(&mut self, debug: Vec<Line2>);
    fn set_result_bounds(&mut self, bounds: Rect2);
}

/// Read inputs from `model`, compute, and write every output back.
pub fn store_results<M: CalculationModel + ?Sized>(
    model: &mut M,
    cfg: &CalcCfg,
) -> Result<CalculationResult, CalcError> {
    let units = model
        .vector_units()
        .ok_or_else(|| CalcError::invalid("no force vector units stored"))?;
    let system = ForceSystem::new(units.to_vec())?;
    let arc = model.arc_path().cloned();
    let result = compute_with(&system, arc.as_ref(), cfg)?;

    model.set_resultant(result.resultant);
    model.set_point_gr(result.point_of_application);
    model.set_debug_vector_units(result.debug_rays.clone());
    model.set_result_bounds(result.result_bounds);
    Ok(result)
}

/// Plain in-memory host, used by the CLI and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryModel {
    pub vector_units: Option<Vec<Line2>>,
    pub arc: Option<ArcPath>,
    pub resultant: Option<Line2>,
    pub point_gr: Option<Vector2<f64>>,
    pub debug_units: Vec<Line2>,
    pub result_bounds: Option<Rect2>,
}

impl InMemoryModel {
    pub fn new(units: Vec<Line2>, arc: Option<ArcPath>) -> Self {
        Self {
            vector_units: Some(units),
            arc,
            ..Self::default()
        }
    }
}

impl CalculationModel for InMemoryModel {
    fn vector_units(&self) -> Option<&[Line2]> {
        self.vector_units.as_deref()
    }

    fn arc_path(&self) -> Option<&ArcPath> {
        self.arc.as_ref()
    }

    fn set_resultant(&mut self, resultant: Line2) {
        self.resultant = Some(resultant);
    }

    fn set_point_gr(&mut self, point: Vector2<f64>) {
        self.point_gr = Some(point);
    }

    fn set_debug_vector_units(&mut self, debug: Vec<Line2>) {
        self.debug_units = debug;
    }

    fn set_result_bounds(&mut self, bounds: Rect2) {
        self.result_bounds = Some(bounds);
    }
}
