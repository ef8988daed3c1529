//! Geometric constants derived from the design inputs.

use crate::errors::ValidationError;
use crate::float_types::{PI, Real};
use crate::params::DesignParameters;
use geo::{Coord, coord};

/// Constants of the rolling-circle construction behind the disk profile.
///
/// Recomputed whenever the parameters change; it is a plain value and carries no
/// link back to the parameters it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// One lobe fewer than there are external pins.
    pub num_lobes: usize,
    pub ring_radius: Real,
    pub rolling_radius: Real,
    pub stationary_radius: Real,
    /// `N / (N - 1)` for `N` external pins.
    pub reduction_ratio: Real,
    /// `(rolling + stationary) / stationary`, the trochoid's angular multiplier.
    pub generating_ratio: Real,
    /// Disk centre in the base pose, offset from the origin by the eccentricity.
    pub disk_center: Coord<Real>,
    pub eccentricity: Real,
}

impl DerivedQuantities {
    /// Computes the rolling/stationary radii and the reduction ratio.
    ///
    /// The parameters are expected to be validated already; the pin count is
    /// re-checked only because a bad count would otherwise surface as a division by
    /// zero further down.
    pub fn compute(params: &DesignParameters) -> Result<Self, ValidationError> {
        let pins = params.num_external_pins();
        if pins < 3 {
            return Err(ValidationError::TooFewPins {
                field: "num_external_pins",
                value: pins,
                min: 3,
            });
        }
        if pins % 2 != 0 {
            return Err(ValidationError::OddPinCount(pins));
        }

        let num_lobes = pins - 1;
        let divisor = (num_lobes + 1) as Real;
        if divisor == 0.0 {
            return Err(ValidationError::DegenerateRatio { num_lobes });
        }

        let ring_radius = 0.5 * params.ring_diameter();
        let rolling_radius = (num_lobes as Real / divisor) * ring_radius;
        let stationary_radius = ring_radius / divisor;
        let e = params.eccentricity();

        Ok(Self {
            num_lobes,
            ring_radius,
            rolling_radius,
            stationary_radius,
            reduction_ratio: pins as Real / num_lobes as Real,
            generating_ratio: (rolling_radius + stationary_radius) / stationary_radius,
            disk_center: coord! { x: e, y: 0.0 },
            eccentricity: e,
        })
    }

    /// Angle the disk turns (clockwise) for an input-shaft angle `phi`.
    pub fn disk_rotation(&self, phi: Real) -> Real {
        -phi / self.num_lobes as Real
    }

    /// Disk centre for an input-shaft angle `phi`.
    pub fn disk_center_at(&self, phi: Real) -> Coord<Real> {
        coord! {
            x: self.eccentricity * phi.cos(),
            y: self.eccentricity * phi.sin(),
        }
    }
}

/// Ring and output-disk diameters sized to the pin count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub ring_diameter: Real,
    pub output_disk_diameter: Real,
}

/// Sizes the pin ring so that `N` pins plus `N - 1` gaps of 1.25 pin diameters fit
/// around its circumference, and the output disk at two thirds of that.
pub fn normalize(num_external_pins: usize, pin_diameter: Real) -> Normalized {
    let n = num_external_pins as Real;
    let ring_diameter = (pin_diameter * n + 1.25 * pin_diameter * (n - 1.0)) / PI;
    Normalized {
        ring_diameter,
        output_disk_diameter: (2.0 / 3.0) * ring_diameter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Real, b: Real, eps: Real) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn radii_follow_the_lobe_count() {
        let params = DesignParameters::default();
        let derived = DerivedQuantities::compute(&params).unwrap();
        assert_eq!(derived.num_lobes, 23);
        assert!(approx(derived.rolling_radius, 23.0 / 24.0 * 40.0, 1e-9));
        assert!(approx(derived.stationary_radius, 40.0 / 24.0, 1e-9));
        assert!(approx(
            derived.rolling_radius + derived.stationary_radius,
            derived.ring_radius,
            1e-9
        ));
        assert!(approx(derived.generating_ratio, 24.0, 1e-9));
    }

    #[test]
    fn reduction_ratio_exceeds_one() {
        for pins in (4..=100).step_by(2) {
            let params = DesignParameters::default().with_external_pins(pins).unwrap();
            let derived = params.derived().unwrap();
            let expected = pins as Real / (pins - 1) as Real;
            assert!(approx(derived.reduction_ratio, expected, 1e-12));
            assert!(derived.reduction_ratio > 1.0);
        }
    }

    #[test]
    fn normalization_matches_the_pin_formula() {
        let n = normalize(24, 6.0);
        assert!(approx(n.ring_diameter, 316.5 / PI, 1e-9));
        assert_eq!((n.ring_diameter * 10.0).round() / 10.0, 100.7);
        assert_eq!((n.output_disk_diameter * 10.0).round() / 10.0, 67.2);
    }

    #[test]
    fn disk_center_orbits_at_eccentricity() {
        let derived = DesignParameters::default().derived().unwrap();
        let c = derived.disk_center_at(PI / 2.0);
        assert!(approx(c.x, 0.0, 1e-9));
        assert!(approx(c.y, 1.4, 1e-9));
        assert_eq!(derived.disk_center_at(0.0), derived.disk_center);
    }
}
