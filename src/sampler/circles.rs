//! Pins, holes and the cam: everything that is a plain circle.

use crate::config::GeneratorConfig;
use crate::curve::{Curve, Role};
use crate::derived::DerivedQuantities;
use crate::float_types::{Real, TAU};
use crate::params::DesignParameters;
use geo::{Coord, coord};

/// `count` points evenly spaced on a circle of `radius` around `center`, the first at
/// angle zero.
pub fn pitch_points(center: Coord<Real>, radius: Real, count: usize) -> Vec<Coord<Real>> {
    (0..count)
        .map(|i| {
            let theta = TAU * i as Real / count as Real;
            coord! {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        })
        .collect()
}

/// The stationary pins on the ring, one per external pin.
pub fn external_pins(
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> Vec<Curve> {
    let radius = 0.5 * params.pin_diameter();
    pitch_points(Coord::zero(), derived.ring_radius, params.num_external_pins())
        .into_iter()
        .map(|c| Curve::circle(Role::ExternalPin, c, radius, config.circle_segments))
        .collect()
}

/// Pins fixed to the output shaft, on the output-disk pitch circle about the origin.
pub fn output_pins(params: &DesignParameters, config: &GeneratorConfig) -> Vec<Curve> {
    let radius = 0.5 * params.output_pin_diameter();
    pitch_points(
        Coord::zero(),
        0.5 * params.output_disk_diameter(),
        params.num_output_pins(),
    )
    .into_iter()
    .map(|c| Curve::circle(Role::OutputPin, c, radius, config.circle_segments))
    .collect()
}

/// Holes in the disk the output pins ride in. Each is one eccentricity larger in
/// radius than its pin so the pin can orbit inside it.
pub fn output_holes(
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> Vec<Curve> {
    let radius = 0.5 * params.output_pin_diameter() + derived.eccentricity;
    pitch_points(
        derived.disk_center,
        0.5 * params.output_disk_diameter(),
        params.num_output_pins(),
    )
    .into_iter()
    .map(|c| Curve::circle(Role::OutputHole, c, radius, config.circle_segments))
    .collect()
}

/// Bore for the input shaft, on the gearbox axis.
pub fn camshaft_hole(params: &DesignParameters, config: &GeneratorConfig) -> Curve {
    Curve::circle(
        Role::CamshaftHole,
        Coord::zero(),
        0.5 * params.camshaft_diameter(),
        config.circle_segments,
    )
}

/// The eccentric lobe on the input shaft that drives the disk. Its radius goes
/// non-positive when the shaft is too thin for the eccentricity; that case is
/// reported as a warning and the circle is still emitted.
pub fn eccentric_cam(
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> Curve {
    let radius = 0.5 * (params.camshaft_diameter() - 2.0 * derived.eccentricity);
    Curve::circle(
        Role::EccentricCam,
        derived.disk_center,
        radius,
        config.circle_segments,
    )
}

pub fn center_axis() -> Curve {
    Curve::marker(Role::CenterAxis, Coord::zero())
}
