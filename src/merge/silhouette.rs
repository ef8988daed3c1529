//! Housing outline as a single region.

use crate::config::HousingStyle;
use crate::curve::{Curve, Role, Shape};
use crate::float_types::Real;
use crate::geometry::GeometrySet;
use geo::{BooleanOps, BoundingRect, MultiPolygon, Orient, Polygon, Rect, orient::Direction};

/// The housing ring with its pin seats resolved into one region, exteriors
/// counter-clockwise and holes clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSilhouette {
    style: HousingStyle,
    region: MultiPolygon<Real>,
}

impl MergedSilhouette {
    /// Builds the silhouette from the housing curves of `geometry`. `None` when the set
    /// carries no housing.
    ///
    /// The annulus between the outer boundary and the scalloped wall is combined with
    /// the pin circles: [`HousingStyle::Pocketed`] subtracts the pin pockets,
    /// [`HousingStyle::PinSilhouette`] adds the external pins.
    pub fn build(geometry: &GeometrySet, style: HousingStyle) -> Option<Self> {
        let ring = geometry.role(Role::OuterRing);
        let boundary = ring
            .iter()
            .find(|c| matches!(c.shape(), Shape::Circle { .. }))?;
        let wall = ring
            .iter()
            .find(|c| matches!(c.shape(), Shape::Profile { .. }));

        let interiors = wall.map(|w| vec![w.points().clone()]).unwrap_or_default();
        let annulus = MultiPolygon::new(vec![Polygon::new(boundary.points().clone(), interiors)]);

        let region = match style {
            HousingStyle::Pocketed => geometry
                .role(Role::PinPocket)
                .iter()
                .fold(annulus, |acc, pocket| acc.difference(&as_region(pocket))),
            HousingStyle::PinSilhouette => geometry
                .role(Role::ExternalPin)
                .iter()
                .fold(annulus, |acc, pin| acc.union(&as_region(pin))),
        };

        let region = region.orient(Direction::Default);
        tracing::debug!(
            ?style,
            polygons = region.0.len(),
            "merged housing silhouette"
        );
        Some(Self { style, region })
    }

    pub(crate) fn from_parts(style: HousingStyle, region: MultiPolygon<Real>) -> Self {
        Self { style, region }
    }

    pub const fn style(&self) -> HousingStyle {
        self.style
    }

    pub const fn region(&self) -> &MultiPolygon<Real> {
        &self.region
    }

    /// Number of disjoint polygons; one for any sensible housing.
    pub fn polygon_count(&self) -> usize {
        self.region.0.len()
    }

    /// Stored points over every exterior and interior ring.
    pub fn total_points(&self) -> usize {
        self.region
            .0
            .iter()
            .map(|p| p.exterior().0.len() + p.interiors().iter().map(|r| r.0.len()).sum::<usize>())
            .sum()
    }

    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.region.bounding_rect()
    }
}

fn as_region(curve: &Curve) -> MultiPolygon<Real> {
    MultiPolygon::new(vec![Polygon::new(curve.points().clone(), vec![])])
}
