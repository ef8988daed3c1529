#![cfg(all(feature = "dxf-io", feature = "svg-io"))]

mod support;

use cycloidrs::{
    GeneratorConfig, GeometrySet, generate,
    io::{ExportError, Format, render},
    merge::merge,
};
use dxf::{Drawing, entities::EntityType};
use support::{housed_params, reference_params};

fn polylines(bytes: &[u8]) -> Vec<(String, Vec<(f64, f64)>)> {
    let drawing = Drawing::load(&mut std::io::Cursor::new(bytes)).unwrap();
    drawing
        .entities()
        .filter_map(|e| match &e.specific {
            EntityType::LwPolyline(p) => Some((
                e.common.layer.clone(),
                p.vertices.iter().map(|v| (v.x, v.y)).collect(),
            )),
            _ => None,
        })
        .collect()
}

#[test]
fn dxf_has_the_eight_layers() {
    let design = generate(&housed_params(), &GeneratorConfig::default()).unwrap();
    let bytes = design.render(Format::Dxf).unwrap();
    let drawing = Drawing::load(&mut std::io::Cursor::new(&bytes)).unwrap();

    let layers: Vec<&str> = drawing.layers().map(|l| l.name.as_str()).collect();
    for name in [
        "CYCLOID_DISK",
        "OUTPUT_PINS",
        "OUTPUT_HOLES",
        "CAMSHAFT_HOLE",
        "ECCENTRIC_CAM",
        "OUTER_RING",
        "PIN_CENTERS",
        "CENTER_AXIS",
    ] {
        assert!(layers.contains(&name), "missing layer {name}");
    }

    // the housing layer is declared even when the ring is hidden
    let bare = generate(&reference_params(), &GeneratorConfig::default())
        .unwrap()
        .render(Format::Dxf)
        .unwrap();
    let bare = Drawing::load(&mut std::io::Cursor::new(&bare)).unwrap();
    assert!(bare.layers().any(|l| l.name == "OUTER_RING"));
    assert_eq!(bare.layers().filter(|l| l.name != "0").count(), 8);

    let entities = polylines(&bytes);
    let on = |layer: &str| entities.iter().filter(|(l, _)| l == layer).count();
    assert_eq!(on("CYCLOID_DISK"), 1);
    assert_eq!(on("PIN_CENTERS"), 24);
    assert_eq!(on("OUTPUT_PINS"), 6);
    assert_eq!(on("OUTPUT_HOLES"), 6);
    // one exterior and one interior ring for the merged housing
    assert_eq!(on("OUTER_RING"), 2);

    let points = drawing
        .entities()
        .filter(|e| matches!(e.specific, EntityType::ModelPoint(_)))
        .count();
    assert_eq!(points, 25);
}

#[test]
fn dxf_export_is_idempotent() {
    let design = generate(&housed_params(), &GeneratorConfig::default()).unwrap();
    let first = design.render(Format::Dxf).unwrap();
    let second = design.render(Format::Dxf).unwrap();
    assert_eq!(polylines(&first), polylines(&second));
}

#[test]
fn svg_export_is_byte_identical() {
    let design = generate(&housed_params(), &GeneratorConfig::default()).unwrap();
    let first = design.render(Format::Svg).unwrap();
    let second = design.render(Format::Svg).unwrap();
    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("viewBox"));
    assert!(text.contains("mm\""));
    for color in ["#666666", "#FF4444", "#44FF44", "#FF44FF", "#4444FF", "#FFAA00", "#888888"] {
        assert!(text.contains(color), "missing {color}");
    }
}

#[test]
fn files_land_at_the_destination() {
    let dir = tempfile::tempdir().unwrap();
    let design = generate(&reference_params(), &GeneratorConfig::default()).unwrap();
    for format in [Format::Dxf, Format::Svg] {
        let path = dir.path().join(format!("gearbox.{}", format.extension()));
        design.export(&path, format).unwrap();
        let written = std::fs::read(&path).unwrap();
        if format == Format::Svg {
            assert_eq!(written, design.render(format).unwrap());
        } else {
            assert_eq!(polylines(&written), polylines(&design.render(format).unwrap()));
        }
    }
    // only the two exports, no temporary leftovers
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn posed_export_differs_from_the_base() {
    let dir = tempfile::tempdir().unwrap();
    let design = generate(&reference_params(), &GeneratorConfig::default()).unwrap();
    let base = dir.path().join("base.svg");
    let turned = dir.path().join("turned.svg");
    design.export(&base, Format::Svg).unwrap();
    design.export_at(0.5, &turned, Format::Svg).unwrap();
    assert_ne!(std::fs::read(base).unwrap(), std::fs::read(turned).unwrap());
}

#[test]
fn empty_geometry_is_refused() {
    let merged = merge(&GeometrySet::new(), &GeneratorConfig::default());
    assert!(matches!(
        render(&merged, Format::Svg),
        Err(ExportError::EmptyGeometry)
    ));
}

#[test]
fn unwritable_destination_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("gearbox.dxf");
    let design = generate(&reference_params(), &GeneratorConfig::default()).unwrap();
    let err = design.export(&path, Format::Dxf).unwrap_err();
    assert!(matches!(err, ExportError::Destination { .. }));
    assert!(!path.exists());
}
