//! Role-tagged closed curves, the unit every later stage works on.

use crate::float_types::{EPSILON, Real, TAU};
use geo::{
    Area, BoundingRect, Coord, LineString, Polygon as GeoPolygon, Rect, Winding, coord,
    winding_order::WindingOrder,
};
use nalgebra::{Isometry2, Point2};
use serde::{Deserialize, Serialize};

/// The feature a curve represents. Ordering is the order curves are emitted in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Role {
    Disk,
    ExternalPin,
    OutputPin,
    OutputHole,
    CamshaftHole,
    EccentricCam,
    /// Housing outer boundary and inner wall.
    OuterRing,
    /// Seats cut into the housing for the external pins.
    PinPocket,
    CenterAxis,
}

/// Direction a role moves under the clearance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clearance {
    /// Holes grow by the tolerance.
    Enlarge,
    /// Mating bodies shrink by the tolerance.
    Shrink,
    Fixed,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::Disk,
        Role::ExternalPin,
        Role::OutputPin,
        Role::OutputHole,
        Role::CamshaftHole,
        Role::EccentricCam,
        Role::OuterRing,
        Role::PinPocket,
        Role::CenterAxis,
    ];

    /// CAD layer the role is exported on.
    pub const fn layer(self) -> &'static str {
        match self {
            Role::Disk => "CYCLOID_DISK",
            Role::OutputPin => "OUTPUT_PINS",
            Role::OutputHole => "OUTPUT_HOLES",
            Role::CamshaftHole => "CAMSHAFT_HOLE",
            Role::EccentricCam => "ECCENTRIC_CAM",
            Role::OuterRing | Role::PinPocket => "OUTER_RING",
            Role::ExternalPin => "PIN_CENTERS",
            Role::CenterAxis => "CENTER_AXIS",
        }
    }

    pub const fn clearance(self) -> Clearance {
        match self {
            Role::PinPocket | Role::OutputHole | Role::CamshaftHole => Clearance::Enlarge,
            Role::Disk | Role::OutputPin | Role::EccentricCam => Clearance::Shrink,
            Role::ExternalPin | Role::OuterRing | Role::CenterAxis => Clearance::Fixed,
        }
    }
}

/// What the points of a curve were sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { center: Coord<Real>, radius: Real },
    /// A free-form closed outline around `center`.
    Profile { center: Coord<Real> },
    /// A reference point, not an outline.
    Marker,
}

/// A named, ordered point sequence for one geometric feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    role: Role,
    shape: Shape,
    points: LineString<Real>,
}

impl Curve {
    /// Samples a circle counter-clockwise starting at angle zero, closed explicitly.
    pub fn circle(role: Role, center: Coord<Real>, radius: Real, segments: usize) -> Self {
        Self {
            role,
            shape: Shape::Circle { center, radius },
            points: circle_ring(center, radius, segments.max(3)),
        }
    }

    /// Wraps an outline; the ring is closed if the last point does not already repeat
    /// the first.
    pub fn profile(role: Role, center: Coord<Real>, mut points: Vec<Coord<Real>>) -> Self {
        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
            if first != last {
                points.push(first);
            }
        }
        Self {
            role,
            shape: Shape::Profile { center },
            points: LineString::new(points),
        }
    }

    pub fn marker(role: Role, at: Coord<Real>) -> Self {
        Self {
            role,
            shape: Shape::Marker,
            points: LineString::new(vec![at]),
        }
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    pub const fn points(&self) -> &LineString<Real> {
        &self.points
    }

    /// Stored coordinates, including the closing repeat.
    pub fn len(&self) -> usize {
        self.points.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.0.is_empty()
    }

    pub const fn is_marker(&self) -> bool {
        matches!(self.shape, Shape::Marker)
    }

    pub fn center(&self) -> Coord<Real> {
        match self.shape {
            Shape::Circle { center, .. } | Shape::Profile { center } => center,
            Shape::Marker => self.points.0.first().copied().unwrap_or_default(),
        }
    }

    /// Nominal radius for circles.
    pub const fn radius(&self) -> Option<Real> {
        match self.shape {
            Shape::Circle { radius, .. } => Some(radius),
            _ => None,
        }
    }

    /// Mean distance of the distinct points from the curve's centre.
    pub fn mean_radius(&self) -> Real {
        let center = self.center();
        let distinct = self.distinct_points();
        if distinct.is_empty() {
            return 0.0;
        }
        distinct
            .iter()
            .map(|p| (p.x - center.x).hypot(p.y - center.y))
            .sum::<Real>()
            / distinct.len() as Real
    }

    /// Points without the closing repeat.
    pub fn distinct_points(&self) -> &[Coord<Real>] {
        let coords = &self.points.0;
        if coords.len() > 1 && self.is_closed_within(0.0) {
            &coords[..coords.len() - 1]
        } else {
            coords
        }
    }

    /// First and last point agree within `epsilon`. Markers count as closed.
    pub fn is_closed_within(&self, epsilon: Real) -> bool {
        match (self.points.0.first(), self.points.0.last()) {
            (Some(first), Some(last)) => {
                (first.x - last.x).abs() <= epsilon && (first.y - last.y).abs() <= epsilon
            }
            _ => false,
        }
    }

    pub fn winding(&self) -> Option<WindingOrder> {
        self.points.winding_order()
    }

    /// Shoelace area, positive for counter-clockwise outlines.
    pub fn signed_area(&self) -> Real {
        if self.is_marker() {
            return 0.0;
        }
        GeoPolygon::new(self.points.clone(), vec![]).signed_area()
    }

    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.points.bounding_rect()
    }

    /// Applies a rigid motion to the points and the shape's centre.
    pub fn transformed(&self, motion: &Isometry2<Real>) -> Self {
        let map = |c: Coord<Real>| {
            let p = motion.transform_point(&Point2::new(c.x, c.y));
            coord! { x: p.x, y: p.y }
        };
        let shape = match self.shape {
            Shape::Circle { center, radius } => Shape::Circle {
                center: map(center),
                radius,
            },
            Shape::Profile { center } => Shape::Profile {
                center: map(center),
            },
            Shape::Marker => Shape::Marker,
        };
        Self {
            role: self.role,
            shape,
            points: self.points.0.iter().copied().map(map).collect(),
        }
    }

    /// Moves the outline by `delta` along its outward normal: circles change radius,
    /// profiles are offset vertex by vertex. Negative `delta` shrinks.
    ///
    /// No clamping: a circle pushed past zero radius comes out mirrored through its
    /// centre, still well-formed.
    pub fn resized(&self, delta: Real) -> Self {
        match self.shape {
            Shape::Circle { center, radius } => {
                let new_radius = radius + delta;
                let points = if radius.abs() > EPSILON {
                    let scale = new_radius / radius;
                    self.points
                        .0
                        .iter()
                        .map(|p| coord! {
                            x: center.x + (p.x - center.x) * scale,
                            y: center.y + (p.y - center.y) * scale,
                        })
                        .collect()
                } else {
                    circle_ring(center, new_radius, self.len().saturating_sub(1).max(3))
                };
                Self {
                    role: self.role,
                    shape: Shape::Circle {
                        center,
                        radius: new_radius,
                    },
                    points,
                }
            },
            Shape::Profile { .. } => Self {
                role: self.role,
                shape: self.shape,
                points: offset_ring(&self.points, delta),
            },
            Shape::Marker => self.clone(),
        }
    }

    /// Same role and shape, different points.
    pub(crate) fn with_points(&self, points: LineString<Real>) -> Self {
        Self {
            role: self.role,
            shape: self.shape,
            points,
        }
    }
}

fn circle_ring(center: Coord<Real>, radius: Real, segments: usize) -> LineString<Real> {
    let mut coords: Vec<Coord<Real>> = (0..segments)
        .map(|i| {
            let theta = TAU * (i as Real) / (segments as Real);
            coord! {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        })
        .collect();
    // close it
    coords.push(coords[0]);
    LineString::new(coords)
}

/// Offsets a closed ring along per-vertex normals estimated from the neighbouring
/// points. Positive `distance` moves outward regardless of winding.
fn offset_ring(ring: &LineString<Real>, distance: Real) -> LineString<Real> {
    let coords = &ring.0;
    let n = if ring.is_closed() {
        coords.len().saturating_sub(1)
    } else {
        coords.len()
    };
    if n < 3 {
        return ring.clone();
    }

    // Right-hand normal points outward on a counter-clockwise ring.
    let sign: Real = match ring.winding_order() {
        Some(WindingOrder::Clockwise) => -1.0,
        _ => 1.0,
    };

    let mut out: Vec<Coord<Real>> = (0..n)
        .map(|i| {
            let prev = coords[(i + n - 1) % n];
            let next = coords[(i + 1) % n];
            let (tx, ty) = (next.x - prev.x, next.y - prev.y);
            let len = tx.hypot(ty);
            if len < EPSILON {
                return coords[i];
            }
            coord! {
                x: coords[i].x + distance * sign * ty / len,
                y: coords[i].y - distance * sign * tx / len,
            }
        })
        .collect();
    out.push(out[0]);
    LineString::new(out)
}
