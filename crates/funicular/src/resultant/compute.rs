use super::types::{ArcPath, CalcCfg, CalculationResult, ForceSystem};
use crate::algebra::{angle_of, line_from_polar, try_line_intersection, Line2, Rect2};
use crate::error::CalcError;
use crate::solver::solve;

/// Every force turned by `turn_deg` about its own start; lengths are kept.
pub fn turned_system(forces: &[Line2], turn_deg: f64) -> Vec<Line2> {
    forces
        .iter()
        .map(|f| line_from_polar(f.p1, f.length(), angle_of(f) + turn_deg))
        .collect()
}

/// Arc bounds (empty without an arc) grown to cover `resultant`, then padded by `margin`.
pub fn result_bounds(arc: Option<&ArcPath>, resultant: &Line2, margin: f64) -> Rect2 {
    arc.map(ArcPath::bounds)
        .unwrap_or_default()
        .union(&resultant.bounds())
        .padded(margin)
}

/// `compute_with` under the default configuration.
pub fn compute(system: &ForceSystem, arc: Option<&ArcPath>) -> Result<CalculationResult, CalcError> {
    compute_with(system, arc, &CalcCfg::default())
}

/// Locate the point of application of `system` and report the resultant starting there.
///
/// Steps
/// - Orientation 1: solve the string polygon, move the resultant so its END is point I1.
/// - Orientation 2: same on the turned system, giving R2 ending at I2.
/// - The point of application is `R1 ∩ R2`; R1 is then moved so its START sits on it.
///
/// A single force is its own resultant: the construction returns it unchanged,
/// anchored at its own start.
pub fn compute_with(
    system: &ForceSystem,
    arc: Option<&ArcPath>,
    cfg: &CalcCfg,
) -> Result<CalculationResult, CalcError> {
    let forces = system.forces();

    let first = solve(forces, cfg.extend_multiplier, cfg.geom)?;
    if first.resultant.length() <= 0.0 {
        return Err(CalcError::degenerate("resultant (forces cancel out)"));
    }
    let r1 = first.resultant.with_end_at(first.point);
    tracing::debug!(p1 = ?(r1.p1.x, r1.p1.y), p2 = ?(r1.p2.x, r1.p2.y), "placed_resultant");

    let turned = turned_system(forces, cfg.turn_deg);
    let second = solve(&turned, cfg.extend_multiplier, cfg.geom)?;
    let r2 = second.resultant.with_end_at(second.point);

    let point = try_line_intersection(&r1, &r2, cfg.geom)
        .ok_or_else(|| CalcError::degenerate("point of application"))?;
    tracing::info!(x = point.x, y = point.y, "point_of_application");

    let resultant = r1.with_start_at(point);
    tracing::info!(
        p1 = ?(resultant.p1.x, resultant.p1.y),
        p2 = ?(resultant.p2.x, resultant.p2.y),
        "resultant"
    );

    let result_bounds = result_bounds(arc, &resultant, cfg.bound_margin);
    tracing::info!(
        x = result_bounds.min.x,
        y = result_bounds.min.y,
        width = result_bounds.width(),
        height = result_bounds.height(),
        "result_bounds"
    );

    Ok(CalculationResult {
        resultant,
        point_of_application: point,
        debug_rays: vec![turned[0], second.first_ray, r2],
        result_bounds,
    })
}
