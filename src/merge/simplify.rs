//! Point reduction that never breaks a closed outline.

use crate::float_types::Real;
use geo::{LineString, MultiPolygon, Polygon, Simplify, Winding};

/// Ramer–Douglas–Peucker with a safety net: the input ring comes back untouched if
/// the reduced ring would have fewer than four points, lose its closure, or flip its
/// winding. A non-positive `epsilon` disables reduction.
pub fn simplify_ring(ring: &LineString<Real>, epsilon: Real) -> LineString<Real> {
    if epsilon <= 0.0 || ring.0.len() < 4 {
        return ring.clone();
    }
    let reduced = ring.simplify(&epsilon);
    let keeps_shape = reduced.0.len() >= 4
        && reduced.is_closed() == ring.is_closed()
        && reduced.winding_order() == ring.winding_order();
    if keeps_shape { reduced } else { ring.clone() }
}

pub fn simplify_region(region: &MultiPolygon<Real>, epsilon: Real) -> MultiPolygon<Real> {
    region
        .0
        .iter()
        .map(|polygon| {
            Polygon::new(
                simplify_ring(polygon.exterior(), epsilon),
                polygon
                    .interiors()
                    .iter()
                    .map(|ring| simplify_ring(ring, epsilon))
                    .collect(),
            )
        })
        .collect()
}
