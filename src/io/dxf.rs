use super::ExportError;
use crate::curve::{Curve, Role};
use crate::float_types::Real;
use crate::merge::MergedGeometry;
use geo::{Coord, LineString};

use dxf::entities::{Entity, EntityType, LwPolyline, ModelPoint};
use dxf::enums::{AcadVersion, Units};
use dxf::tables::Layer;
use dxf::{Color, Drawing, LwPolylineVertex, Point};

/// AutoCAD color index of each export layer.
pub const fn layer_color(role: Role) -> u8 {
    match role {
        Role::Disk => 1,
        Role::EccentricCam => 2,
        Role::OutputPin => 3,
        Role::CenterAxis => 4,
        Role::CamshaftHole => 5,
        Role::OutputHole => 6,
        Role::ExternalPin => 7,
        Role::OuterRing | Role::PinPocket => 8,
    }
}

/// Export merged geometry to a layered DXF drawing.
///
/// Every outline becomes a closed `LWPOLYLINE` on its role's layer. External pins and
/// the gearbox axis additionally get a `POINT` at their centre, which CAM tools use to
/// place drill operations. Coordinates are millimetres with y up.
pub fn to_dxf(geometry: &MergedGeometry) -> Result<Vec<u8>, ExportError> {
    let mut drawing = Drawing::new();
    // LWPOLYLINE needs R14 or newer
    drawing.header.version = AcadVersion::R2010;
    drawing.header.default_drawing_units = Units::Millimeters;

    // all eight layers, whether or not anything lands on them
    let mut declared: Vec<&str> = Vec::with_capacity(Role::ALL.len());
    for role in Role::ALL {
        if declared.contains(&role.layer()) {
            continue;
        }
        declared.push(role.layer());
        drawing.add_layer(Layer {
            name: role.layer().to_string(),
            color: Color::from_index(layer_color(role)),
            ..Default::default()
        });
    }

    for curve in geometry.curves().iter() {
        add_curve(&mut drawing, curve);
    }

    if let Some(silhouette) = geometry.silhouette() {
        for polygon in &silhouette.region().0 {
            add_polyline(&mut drawing, polygon.exterior(), Role::OuterRing.layer());
            for ring in polygon.interiors() {
                add_polyline(&mut drawing, ring, Role::OuterRing.layer());
            }
        }
    }

    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    Ok(buffer)
}

fn add_curve(drawing: &mut Drawing, curve: &Curve) {
    let layer = curve.role().layer();
    if !curve.is_marker() {
        add_polyline(drawing, curve.points(), layer);
    }
    if matches!(curve.role(), Role::ExternalPin | Role::CenterAxis) {
        add_point(drawing, curve.center(), layer);
    }
}

fn add_polyline(drawing: &mut Drawing, ring: &LineString<Real>, layer: &str) {
    let coords = &ring.0;
    // the closed flag replaces the repeated endpoint
    let open = if ring.is_closed() && coords.len() > 1 {
        &coords[..coords.len() - 1]
    } else {
        &coords[..]
    };

    #[allow(clippy::unnecessary_cast)]
    let vertices = open
        .iter()
        .map(|c| LwPolylineVertex {
            x: c.x as f64,
            y: c.y as f64,
            ..Default::default()
        })
        .collect();

    let polyline = LwPolyline {
        vertices,
        flags: 1,
        ..Default::default()
    };

    let mut entity = Entity::new(EntityType::LwPolyline(polyline));
    entity.common.layer = layer.to_string();
    drawing.add_entity(entity);
}

fn add_point(drawing: &mut Drawing, at: Coord<Real>, layer: &str) {
    #[allow(clippy::unnecessary_cast)]
    let point = ModelPoint::new(Point::new(at.x as f64, at.y as f64, 0.0));
    let mut entity = Entity::new(EntityType::ModelPoint(point));
    entity.common.layer = layer.to_string();
    drawing.add_entity(entity);
}
