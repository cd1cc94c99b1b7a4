use nalgebra::Vector2;

use super::rays::{aux_pole, next_intersection, place_closing_ray, place_first_ray};
use super::types::{Construction, ForcePolygon};
use crate::algebra::{sum_all, try_line_intersection, GeomCfg, Line2};
use crate::error::CalcError;

/// Run the string-polygon recurrence from an already placed `first_ray`.
///
/// Returns the meeting point of the first and closing rays together with the
/// closing ray itself.
pub fn string_polygon_point(
    forces: &[Line2],
    pole: Vector2<f64>,
    first_ray: &Line2,
    cfg: GeomCfg,
) -> Result<(Vector2<f64>, Line2), CalcError> {
    let polygon = ForcePolygon::new(forces).ok_or_else(|| CalcError::invalid("no forces"))?;
    let mut last = first_ray.p2;
    for (i, st) in polygon.stations.iter().enumerate().skip(1) {
        last = next_intersection(&st.force, pole, st.vertex, last, cfg)
            .ok_or_else(|| CalcError::degenerate(format!("ray {} against force {}", i + 1, i + 1)))?;
    }
    let closing = place_closing_ray(polygon.closing, pole, last);
    let point = try_line_intersection(first_ray, &closing, cfg)
        .ok_or_else(|| CalcError::degenerate("closing ray against first ray"))?;
    Ok((point, closing))
}

/// Full construction for one orientation: resultant, pole, S1, closing ray and point I.
pub fn solve(forces: &[Line2], multiplier: f64, cfg: GeomCfg) -> Result<Construction, CalcError> {
    let resultant = sum_all(forces).ok_or_else(|| CalcError::invalid("no forces"))?;
    let pole = aux_pole(&resultant);
    let first_ray = place_first_ray(&forces[0], pole, multiplier);
    let (point, closing_ray) = string_polygon_point(forces, pole, &first_ray, cfg)?;
    tracing::debug!(
        forces = forces.len(),
        pole = ?(pole.x, pole.y),
        point = ?(point.x, point.y),
        "string_polygon"
    );
    Ok(Construction {
        resultant,
        pole,
        first_ray,
        closing_ray,
        point,
    })
}
