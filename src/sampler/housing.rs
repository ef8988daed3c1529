//! The optional housing ring that carries the external pins.

use crate::config::GeneratorConfig;
use crate::curve::{Curve, Role};
use crate::derived::DerivedQuantities;
use crate::float_types::{Real, TAU};
use crate::params::DesignParameters;
use crate::sampler::circles::pitch_points;
use geo::{Coord, coord};

/// Radial swing of the scalloped wall, as a multiple of the pin radius.
const WALL_SWING: Real = 1.6;

/// Outer boundary of the housing: a circle `outer_ring_width` beyond the pin ring.
pub fn outer_boundary(
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> Curve {
    let samples = params.num_external_pins() * config.housing_samples_per_pin;
    Curve::circle(
        Role::OuterRing,
        Coord::zero(),
        derived.ring_radius + params.outer_ring_width(),
        samples,
    )
}

/// Inner wall of the housing. It dips to `R - 0.8 rp` under each pin so the pins are
/// captured, and bulges to `R + 0.8 rp` between them to clear the disk lobes:
///
/// ```text
/// r(θ) = R - 0.8 rp + 1.6 rp (1 - cos Nθ) / 2
/// ```
pub fn inner_wall(
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> Curve {
    let pins = params.num_external_pins();
    let samples = pins * config.housing_samples_per_pin;
    let pin_radius = 0.5 * params.pin_diameter();
    let base = derived.ring_radius - 0.5 * WALL_SWING * pin_radius;

    let points: Vec<Coord<Real>> = (0..samples)
        .map(|i| {
            let theta = TAU * i as Real / samples as Real;
            let r = base + WALL_SWING * pin_radius * (1.0 - (pins as Real * theta).cos()) / 2.0;
            coord! { x: r * theta.cos(), y: r * theta.sin() }
        })
        .collect();

    Curve::profile(Role::OuterRing, Coord::zero(), points)
}

/// Pin seats cut into the housing, one per external pin and concentric with it.
pub fn pin_pockets(
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> Vec<Curve> {
    let radius = 0.5 * params.pin_diameter();
    pitch_points(Coord::zero(), derived.ring_radius, params.num_external_pins())
        .into_iter()
        .map(|c| Curve::circle(Role::PinPocket, c, radius, config.circle_segments))
        .collect()
}
