//! Export-stage preparation: the housing is resolved into one silhouette and every
//! outline is thinned to the configured tolerance.

mod silhouette;
mod simplify;

pub use silhouette::MergedSilhouette;
pub use simplify::{simplify_region, simplify_ring};

use crate::config::GeneratorConfig;
use crate::curve::Role;
use crate::float_types::Real;
use crate::geometry::GeometrySet;
use geo::{Rect, coord};

/// What the exporters draw: the remaining curves plus, when a housing is shown, its
/// merged silhouette in place of the ring and pocket curves.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedGeometry {
    curves: GeometrySet,
    silhouette: Option<MergedSilhouette>,
    svg_margin: Real,
}

impl MergedGeometry {
    pub const fn curves(&self) -> &GeometrySet {
        &self.curves
    }

    pub const fn silhouette(&self) -> Option<&MergedSilhouette> {
        self.silhouette.as_ref()
    }

    pub const fn svg_margin(&self) -> Real {
        self.svg_margin
    }

    pub fn total_points(&self) -> usize {
        self.curves.total_points()
            + self.silhouette.as_ref().map_or(0, MergedSilhouette::total_points)
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty() && self.silhouette.is_none()
    }

    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        let curves = self.curves.bounding_rect();
        let housing = self.silhouette.as_ref().and_then(MergedSilhouette::bounding_rect);
        match (curves, housing) {
            (Some(a), Some(b)) => Some(Rect::new(
                coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            )),
            (a, b) => a.or(b),
        }
    }
}

/// Prepares a (tolerance-adjusted) geometry set for export.
pub fn merge(geometry: &GeometrySet, config: &GeneratorConfig) -> MergedGeometry {
    let epsilon = config.simplify_tolerance;

    let silhouette = MergedSilhouette::build(geometry, config.housing_style).map(|s| {
        MergedSilhouette::from_parts(s.style(), simplify_region(s.region(), epsilon))
    });

    let mut curves = geometry.clone();
    if silhouette.is_some() {
        curves.take(Role::OuterRing);
        curves.take(Role::PinPocket);
    }
    let curves = curves.map(|curve| {
        if curve.is_marker() {
            curve.clone()
        } else {
            curve.with_points(simplify_ring(curve.points(), epsilon))
        }
    });

    let merged = MergedGeometry {
        curves,
        silhouette,
        svg_margin: config.svg_margin,
    };
    tracing::debug!(
        before = geometry.total_points(),
        after = merged.total_points(),
        "merged geometry for export"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HousingStyle;
    use crate::params::DesignParameters;
    use crate::{sampler, tolerance};

    fn adjusted(params: &DesignParameters, config: &GeneratorConfig) -> GeometrySet {
        let derived = params.derived().unwrap();
        let nominal = sampler::sample(params, &derived, config);
        tolerance::apply(&nominal, params.tolerance()).unwrap()
    }

    #[test]
    fn housing_collapses_to_one_silhouette() {
        let params = DesignParameters::default().with_outer_ring(true);
        for style in [HousingStyle::Pocketed, HousingStyle::PinSilhouette] {
            let config = GeneratorConfig::default().with_housing_style(style);
            let merged = merge(&adjusted(&params, &config), &config);
            let silhouette = merged.silhouette().unwrap();
            assert_eq!(silhouette.polygon_count(), 1);
            assert_eq!(silhouette.style(), style);
            assert!(!merged.curves().contains(Role::OuterRing));
            assert!(!merged.curves().contains(Role::PinPocket));
        }
    }

    #[test]
    fn no_housing_means_no_silhouette() {
        let config = GeneratorConfig::default();
        let merged = merge(&adjusted(&DesignParameters::default(), &config), &config);
        assert!(merged.silhouette().is_none());
        assert_eq!(merged.curves().count(Role::ExternalPin), 24);
    }

    #[test]
    fn zero_epsilon_keeps_every_curve_point() {
        let config = GeneratorConfig::default().with_simplify_tolerance(0.0);
        let geometry = adjusted(&DesignParameters::default(), &config);
        let merged = merge(&geometry, &config);
        assert_eq!(merged.curves(), &geometry);
    }
}
