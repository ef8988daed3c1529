use crate::curve::Role;
use crate::float_types::Real;
use crate::merge::MergedGeometry;
use geo::LineString;
use svg::Document;
use svg::node::element::{Group, Path, path::Data};

/// Stroke colour and width (mm) each role is drawn with.
pub const fn role_style(role: Role) -> (&'static str, Real) {
    match role {
        Role::ExternalPin => ("#666666", 0.5),
        Role::Disk => ("#FF4444", 0.8),
        Role::OutputPin => ("#44FF44", 0.5),
        Role::OutputHole => ("#FF44FF", 0.5),
        Role::CamshaftHole => ("#4444FF", 0.6),
        Role::EccentricCam => ("#FFAA00", 0.5),
        Role::OuterRing | Role::PinPocket | Role::CenterAxis => ("#888888", 0.6),
    }
}

/// Renders merged geometry as a standalone SVG document.
///
/// The y axis is flipped so the drawing reads the same way as the DXF. Width and
/// height are given in millimetres and the view box is the geometry's bounding box
/// grown by the configured margin, so the file prints at 1:1.
pub fn to_svg(geometry: &MergedGeometry) -> String {
    let margin = geometry.svg_margin();
    let (min_x, min_y, width, height) = match geometry.bounding_rect() {
        Some(rect) => (
            rect.min().x - margin,
            -rect.max().y - margin,
            rect.width() + 2.0 * margin,
            rect.height() + 2.0 * margin,
        ),
        None => (-margin, -margin, 2.0 * margin, 2.0 * margin),
    };

    let mut document = Document::new()
        .set("width", format!("{width}mm"))
        .set("height", format!("{height}mm"))
        .set("viewBox", format!("{min_x} {min_y} {width} {height}"));

    for role in geometry.curves().roles() {
        let (color, stroke_width) = role_style(role);
        let mut group = Group::new()
            .set("id", role.layer())
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-width", stroke_width.to_string());
        for curve in geometry.curves().role(role) {
            if let Some(data) = ring_data(curve.points()) {
                group = group.add(Path::new().set("d", data));
            }
        }
        document = document.add(group);
    }

    if let Some(silhouette) = geometry.silhouette() {
        let (color, stroke_width) = role_style(Role::OuterRing);
        let mut data = Data::new();
        for polygon in &silhouette.region().0 {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                data = append_ring(data, ring);
            }
        }
        document = document.add(
            Path::new()
                .set("id", Role::OuterRing.layer())
                .set("fill", "none")
                .set("fill-rule", "evenodd")
                .set("stroke", color)
                .set("stroke-width", stroke_width.to_string())
                .set("d", data),
        );
    }

    document.to_string()
}

fn ring_data(ring: &LineString<Real>) -> Option<Data> {
    (ring.0.len() >= 2).then(|| append_ring(Data::new(), ring))
}

#[allow(clippy::unnecessary_cast)]
fn append_ring(data: Data, ring: &LineString<Real>) -> Data {
    let mut coords = ring.0.iter();
    let Some(first) = coords.next() else {
        return data;
    };
    let mut data = data.move_to((first.x as f32, -first.y as f32));
    for c in coords {
        data = data.line_to((c.x as f32, -c.y as f32));
    }
    data.close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::curve::Curve;
    use crate::geometry::GeometrySet;
    use crate::merge::merge;
    use geo::coord;

    #[test]
    fn document_carries_size_and_role_colors() {
        let set = GeometrySet::from_curves([
            Curve::circle(Role::OutputPin, coord! { x: 0.0, y: 0.0 }, 5.0, 16),
            Curve::circle(Role::CamshaftHole, coord! { x: 0.0, y: 0.0 }, 2.0, 16),
        ]);
        let config = GeneratorConfig::default().with_svg_margin(10.0);
        let svg = to_svg(&merge(&set, &config));

        assert!(svg.contains("width=\"30mm\""));
        assert!(svg.contains("viewBox=\"-15 -15 30 30\""));
        assert!(svg.contains("#44FF44"));
        assert!(svg.contains("#4444FF"));
        assert!(!svg.contains("#FF4444"));
    }
}
