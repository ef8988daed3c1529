//! Fit clearance between mating parts.
//!
//! Holes grow by `τ`, the bodies that run in them shrink by `τ`, and parts that
//! belong to neither side of a fit keep their nominal size. See [`Role::clearance`]
//! for which role goes where.

use crate::curve::{Clearance, Role};
use crate::errors::{ValidationError, ValidationWarning};
use crate::float_types::{EPSILON, Real};
use crate::geometry::GeometrySet;

/// Each hole paired with the body it has to clear.
pub const FITS: [(Role, Role); 3] = [
    (Role::PinPocket, Role::ExternalPin),
    (Role::OutputHole, Role::OutputPin),
    (Role::CamshaftHole, Role::EccentricCam),
];

/// Returns a copy of `geometry` with the clearance `tolerance` applied per role.
///
/// The offset is applied arithmetically even when it drives a radius through zero;
/// use [`clearance_warnings`] to find out whether the result still makes sense.
pub fn apply(geometry: &GeometrySet, tolerance: Real) -> Result<GeometrySet, ValidationError> {
    if tolerance.is_nan() || tolerance.is_infinite() {
        return Err(ValidationError::NotFinite { field: "tolerance" });
    }
    if tolerance < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "tolerance",
            value: tolerance,
            min: 0.0,
            max: Real::INFINITY,
        });
    }

    tracing::debug!(tolerance, "applying fit clearance");
    Ok(geometry.map(|curve| match curve.role().clearance() {
        Clearance::Enlarge => curve.resized(tolerance),
        Clearance::Shrink => curve.resized(-tolerance),
        Clearance::Fixed => curve.clone(),
    }))
}

/// Advisory checks on an adjusted geometry set: circles that turned inside out, and
/// fits whose radial clearance dropped below `tolerance`.
pub fn clearance_warnings(adjusted: &GeometrySet, tolerance: Real) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for curve in adjusted.iter() {
        if let Some(radius) = curve.radius() {
            if radius <= 0.0 {
                warnings.push(ValidationWarning::NonPositiveRadius {
                    role: curve.role(),
                    radius,
                });
            }
        }
    }
    // one report per role is enough
    warnings.dedup_by(|a, b| match (a, b) {
        (
            ValidationWarning::NonPositiveRadius { role: ra, .. },
            ValidationWarning::NonPositiveRadius { role: rb, .. },
        ) => ra == rb,
        _ => false,
    });

    for (hole, body) in FITS {
        let smallest_hole = adjusted
            .role(hole)
            .iter()
            .filter_map(|c| c.radius())
            .reduce(Real::min);
        let largest_body = adjusted
            .role(body)
            .iter()
            .filter_map(|c| c.radius())
            .reduce(Real::max);
        if let (Some(h), Some(b)) = (smallest_hole, largest_body) {
            let clearance = h - b;
            if clearance + EPSILON < tolerance {
                warnings.push(ValidationWarning::PartsMayBind {
                    hole,
                    body,
                    clearance,
                    tolerance,
                });
            }
        }
    }

    for warning in &warnings {
        tracing::warn!(%warning, "clearance check");
    }
    warnings
}
