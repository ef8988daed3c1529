//! Turns validated parameters into sampled curves.
//!
//! Each role is sampled by its own pure function; [`sample`] fans them out (across
//! threads with the `parallel` feature) and collects the result into a
//! [`GeometrySet`].

pub mod circles;
pub mod disk;
pub mod housing;

use crate::config::GeneratorConfig;
use crate::curve::{Curve, Role};
use crate::derived::DerivedQuantities;
use crate::geometry::GeometrySet;
use crate::params::DesignParameters;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Samples every curve of one role in its base pose.
pub fn sample_role(
    role: Role,
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> Vec<Curve> {
    match role {
        Role::Disk => vec![disk::disk_profile(params, derived, config)],
        Role::ExternalPin => circles::external_pins(params, derived, config),
        Role::OutputPin => circles::output_pins(params, config),
        Role::OutputHole => circles::output_holes(params, derived, config),
        Role::CamshaftHole => vec![circles::camshaft_hole(params, config)],
        Role::EccentricCam => vec![circles::eccentric_cam(params, derived, config)],
        Role::OuterRing => vec![
            housing::outer_boundary(params, derived, config),
            housing::inner_wall(params, derived, config),
        ],
        Role::PinPocket => housing::pin_pockets(params, derived, config),
        Role::CenterAxis => vec![circles::center_axis()],
    }
}

/// Roles present for these parameters: the housing roles only when the outer ring is
/// shown.
pub fn active_roles(params: &DesignParameters) -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|role| {
            params.show_outer_ring() || !matches!(role, Role::OuterRing | Role::PinPocket)
        })
        .collect()
}

/// Samples the full geometry set in the base pose (`phi = 0`).
pub fn sample(
    params: &DesignParameters,
    derived: &DerivedQuantities,
    config: &GeneratorConfig,
) -> GeometrySet {
    let roles = active_roles(params);

    #[cfg(feature = "parallel")]
    let curves: Vec<Vec<Curve>> = roles
        .par_iter()
        .map(|&role| sample_role(role, params, derived, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let curves: Vec<Vec<Curve>> = roles
        .iter()
        .map(|&role| sample_role(role, params, derived, config))
        .collect();

    let set = GeometrySet::from_curves(curves.into_iter().flatten());
    tracing::debug!(
        curves = set.len(),
        points = set.total_points(),
        "sampled geometry"
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn housing_roles_follow_the_toggle() {
        let params = DesignParameters::default();
        let derived = params.derived().unwrap();
        let config = GeneratorConfig::default();

        let bare = sample(&params, &derived, &config);
        assert!(!bare.contains(Role::OuterRing));
        assert!(!bare.contains(Role::PinPocket));

        let params = params.with_outer_ring(true);
        let housed = sample(&params, &derived, &config);
        assert_eq!(housed.count(Role::OuterRing), 2);
        assert_eq!(housed.count(Role::PinPocket), 24);
    }

    #[test]
    fn every_outline_is_closed() {
        let params = DesignParameters::default().with_outer_ring(true);
        let derived = params.derived().unwrap();
        let set = sample(&params, &derived, &GeneratorConfig::default());
        for curve in set.iter().filter(|c| !c.is_marker()) {
            assert!(curve.is_closed_within(0.0), "{:?} not closed", curve.role());
        }
    }
}
