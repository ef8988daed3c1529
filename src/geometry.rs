//! The complete set of role-tagged curves for one design.

use crate::curve::{Curve, Role};
use crate::derived::DerivedQuantities;
use crate::float_types::Real;
use geo::{Rect, coord};
use nalgebra::{Isometry2, Vector2};
use std::collections::BTreeMap;

/// Curves grouped by role. Roles iterate in declaration order, curves within a role in
/// the order they were sampled (pins by increasing angle).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometrySet {
    curves: BTreeMap<Role, Vec<Curve>>,
}

impl GeometrySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_curves<I: IntoIterator<Item = Curve>>(curves: I) -> Self {
        let mut set = Self::new();
        for curve in curves {
            set.push(curve);
        }
        set
    }

    pub fn push(&mut self, curve: Curve) {
        self.curves.entry(curve.role()).or_default().push(curve);
    }

    /// Curves for one role; empty when the role is absent.
    pub fn role(&self, role: Role) -> &[Curve] {
        self.curves.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, role: Role) -> usize {
        self.role(role).len()
    }

    pub fn contains(&self, role: Role) -> bool {
        self.count(role) > 0
    }

    /// Removes every curve of `role`, returning them.
    pub fn take(&mut self, role: Role) -> Vec<Curve> {
        self.curves.remove(&role).unwrap_or_default()
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.curves
            .iter()
            .filter(|(_, curves)| !curves.is_empty())
            .map(|(role, _)| *role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Curve> {
        self.curves.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.curves.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored points over all curves.
    pub fn total_points(&self) -> usize {
        self.iter().map(Curve::len).sum()
    }

    /// Applies `f` to every curve, keeping the grouping.
    pub fn map<F: Fn(&Curve) -> Curve>(&self, f: F) -> Self {
        Self::from_curves(self.iter().map(f))
    }

    /// Axis-aligned box around every point, `None` for an empty set.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.iter()
            .filter_map(Curve::bounding_rect)
            .reduce(|a, b| {
                Rect::new(
                    coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                    coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
                )
            })
    }

    /// The set as it stands when the input shaft has turned by `phi` radians.
    ///
    /// The disk and its output holes turn by `-phi / L` about their own centre while
    /// that centre orbits the origin at the eccentricity. The eccentric cam orbits
    /// without turning, the output pins turn with the output shaft about the origin,
    /// and everything fixed to the housing stays put.
    pub fn posed(&self, phi: Real, derived: &DerivedQuantities) -> Self {
        let turn = derived.disk_rotation(phi);
        let base = derived.disk_center;
        let orbit = derived.disk_center_at(phi);

        // Rotate about the base disk centre, then carry that centre to its orbit
        // position.
        let disk_motion = Isometry2::new(Vector2::new(orbit.x, orbit.y), turn)
            * Isometry2::translation(-base.x, -base.y);
        let cam_motion = Isometry2::translation(orbit.x - base.x, orbit.y - base.y);
        let output_motion = Isometry2::rotation(turn);

        self.map(|curve| match curve.role() {
            Role::Disk | Role::OutputHole => curve.transformed(&disk_motion),
            Role::EccentricCam => curve.transformed(&cam_motion),
            Role::OutputPin => curve.transformed(&output_motion),
            Role::ExternalPin
            | Role::CamshaftHole
            | Role::OuterRing
            | Role::PinPocket
            | Role::CenterAxis => curve.clone(),
        })
    }
}

impl<'a> IntoIterator for &'a GeometrySet {
    type Item = &'a Curve;
    type IntoIter = std::iter::Flatten<std::collections::btree_map::Values<'a, Role, Vec<Curve>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.values().flatten()
    }
}
