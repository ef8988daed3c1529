//! The cycloidal disk outline.
//!
//! The profile is the inner envelope of the pin circle as the disk rolls: a point on a
//! circle of radius `R` traces the trochoid
//!
//! ```text
//! x(t) = R cos t - e cos(k t)
//! y(t) = R sin t - e sin(k t)
//! ```
//!
//! with `k = (Rr + Rs) / Rs`, and the contact curve sits one pin radius inside it
//! along the normal. The whole outline is then moved to the disk centre.

use crate::config::GeneratorConfig;
use crate::curve::{Curve, Role};
use crate::derived::DerivedQuantities;
use crate::float_types::{EPSILON, Real, TAU};
use crate::params::DesignParameters;
use geo::{Coord, coord};

/// Smallest whole number of `2π` sweeps after which `k t` is also a whole number of
/// turns, so the trochoid returns to its start. Falls back to `max_periods` when `k` is
/// not rational within `tolerance` at any smaller multiple.
pub fn closure_periods(generating_ratio: Real, tolerance: Real, max_periods: usize) -> usize {
    let max_periods = max_periods.max(1);
    (1..=max_periods)
        .find(|&q| {
            let turns = generating_ratio * q as Real;
            (turns - turns.round()).abs() <= tolerance
        })
        .unwrap_or(max_periods)
}

/// Samples one point of the contact curve, relative to the disk centre.
fn contact_point(t: Real, derived: &DerivedQuantities, pin_radius: Real) -> Coord<Real> {
    let r = derived.ring_radius;
    let e = derived.eccentricity;
    let k = derived.generating_ratio;
    let rs = derived.stationary_radius;

    let (sin_t, cos_t) = t.sin_cos();
    let (sin_kt, cos_kt) = (k * t).sin_cos();

    let x = r * cos_t - e * cos_kt;
    let y = r * sin_t - e * sin_kt;

    let dx = r * (-sin_t + (e / rs) * sin_kt);
    let dy = r * (cos_t - (e / rs) * cos_kt);
    let norm = dx.hypot(dy);

    // Left-hand normal of a counter-clockwise sweep points inward.
    let (nx, ny) = if norm > EPSILON {
        (-dy / norm, dx / norm)
    } else {
        let radial = x.hypot(y);
        if radial > EPSILON {
            (-x / radial, -y / radial)
        } else {
            (0.0, 0.0)
        }
    };

    coord! { x: x + pin_radius * nx, y: y + pin_radius * ny }
}

/// Samples the closed disk outline in its base pose (`phi = 0`).
pub fn disk_profile(
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> Curve {
    let per_period = (config.disk_samples_per_lobe * derived.num_lobes)
        .max(config.min_disk_samples)
        .max(3);
    let periods = closure_periods(
        derived.generating_ratio,
        config.closure_tolerance,
        config.max_closure_periods,
    );
    let total = per_period * periods;
    let sweep = TAU * periods as Real;
    let pin_radius = 0.5 * params.pin_diameter();
    let center = derived.disk_center;

    tracing::debug!(
        samples = total,
        periods,
        lobes = derived.num_lobes,
        "sampling disk profile"
    );

    let mut points: Vec<Coord<Real>> = (0..total)
        .map(|i| {
            let t = sweep * i as Real / total as Real;
            let p = contact_point(t, derived, pin_radius);
            coord! { x: p.x + center.x, y: p.y + center.y }
        })
        .collect();
    // exact closure
    points.push(points[0]);

    Curve::profile(Role::Disk, center, points)
}
