mod support;

use cycloidrs::{
    DesignParameters, GeneratorConfig, Role, ValidationError, ValidationWarning,
    derived::normalize,
    float_types::{CLOSURE_FACTOR, Real},
    generate,
};
use support::{approx_eq, design_sweep, housed_params, reference_params};

#[test]
fn reference_design_has_one_curve_per_feature() {
    let design = generate(&reference_params(), &GeneratorConfig::default()).unwrap();
    let geometry = design.geometry();

    assert_eq!(geometry.count(Role::Disk), 1);
    assert_eq!(geometry.count(Role::ExternalPin), 24);
    assert_eq!(geometry.count(Role::OutputPin), 6);
    assert_eq!(geometry.count(Role::OutputHole), 6);
    assert_eq!(geometry.count(Role::CamshaftHole), 1);
    assert_eq!(geometry.count(Role::EccentricCam), 1);
    assert_eq!(geometry.count(Role::CenterAxis), 1);
    assert!(!geometry.contains(Role::OuterRing));
    assert!(design.warnings().is_empty(), "{:?}", design.warnings());
}

#[test]
fn housed_reference_merges_into_one_silhouette() {
    let design = generate(&housed_params(), &GeneratorConfig::default()).unwrap();
    assert_eq!(design.geometry().count(Role::PinPocket), 24);

    let merged = design.merged();
    let silhouette = merged.silhouette().expect("housing is shown");
    assert_eq!(silhouette.polygon_count(), 1);
    assert_eq!(merged.curves().count(Role::Disk), 1);
    assert!(!merged.curves().contains(Role::PinPocket));
}

#[test]
fn odd_pin_count_yields_no_geometry() {
    assert_eq!(
        DesignParameters::default().with_external_pins(23),
        Err(ValidationError::OddPinCount(23))
    );

    // A preset that bypassed the setters is caught by the pipeline.
    let mut value = serde_json::to_value(reference_params()).unwrap();
    value["num_external_pins"] = serde_json::json!(23);
    let params: DesignParameters = serde_json::from_value(value).unwrap();
    assert!(matches!(
        generate(&params, &GeneratorConfig::default()),
        Err(ValidationError::OddPinCount(23))
    ));
}

#[test]
fn reduction_ratio_is_above_one_for_every_even_count() {
    for pins in (4..=100).step_by(2) {
        let params = DesignParameters::default().with_external_pins(pins).unwrap();
        let derived = params.derived().unwrap();
        let n = pins as Real;
        assert!(approx_eq(derived.reduction_ratio, n / (n - 1.0), 1e-12));
        assert!(derived.reduction_ratio > 1.0);
    }
}

#[test]
fn disk_outline_closes_for_every_design() {
    let config = GeneratorConfig::default();
    for params in design_sweep().into_iter().chain([reference_params()]) {
        let design = generate(&params, &config).unwrap();
        let disk = &design.geometry().role(Role::Disk)[0];
        let epsilon = CLOSURE_FACTOR * params.ring_diameter();
        assert!(
            disk.is_closed_within(epsilon),
            "{} pins: disk not closed",
            params.num_external_pins()
        );
        assert!(disk.len() > 720);
    }
}

#[test]
fn normalization_feeds_back_cleanly() {
    let n = normalize(24, 6.0);
    assert!(approx_eq(
        n.ring_diameter,
        (6.0 * 24.0 + 1.25 * 6.0 * 23.0) / cycloidrs::float_types::PI,
        1e-9
    ));
    assert!(approx_eq(n.output_disk_diameter, 2.0 / 3.0 * n.ring_diameter, 1e-9));

    let params = reference_params().normalized().unwrap();
    assert_eq!(params.ring_diameter(), 100.7);
    assert_eq!(params.output_disk_diameter(), 67.2);
    assert!(params.derived().is_ok());
    assert!(generate(&params, &GeneratorConfig::default()).is_ok());
}

#[test]
fn large_eccentricity_still_produces_geometry() {
    let params = reference_params()
        .with_pin_diameter(3.0)
        .and_then(|p| p.with_eccentricity(3.5))
        .and_then(|p| p.with_camshaft_diameter(20.0))
        .unwrap();
    let design = generate(&params, &GeneratorConfig::default()).unwrap();
    assert!(
        design
            .warnings()
            .iter()
            .any(|w| matches!(w, ValidationWarning::EccentricityTooLarge { .. }))
    );
    assert!(design.geometry().role(Role::Disk)[0].is_closed_within(1e-9));
}

#[test]
fn housing_rim_thinner_than_a_pin_seat_is_flagged() {
    let params = DesignParameters::default()
        .with_external_pins(24)
        .and_then(|p| p.with_pin_diameter(6.0))
        .and_then(|p| p.with_tolerance(0.01))
        .and_then(|p| p.with_outer_ring_width(2.0))
        .and_then(|p| p.normalized())
        .unwrap()
        .with_outer_ring(true);
    let design = generate(&params, &GeneratorConfig::default()).unwrap();
    assert!(
        design.warnings().iter().any(|w| matches!(
            w,
            ValidationWarning::HousingRimTooThin { width, .. } if *width == 2.0
        )),
        "{:?}",
        design.warnings()
    );

    // Enough rim around the seats keeps the housing in one piece.
    let params = params.with_outer_ring_width(8.0).unwrap();
    let design = generate(&params, &GeneratorConfig::default()).unwrap();
    assert!(
        !design
            .warnings()
            .iter()
            .any(|w| matches!(w, ValidationWarning::HousingRimTooThin { .. }))
    );
    let merged = design.merged();
    assert_eq!(merged.silhouette().map(|s| s.polygon_count()), Some(1));
}

#[test]
fn repeated_generation_is_reproducible() {
    let config = GeneratorConfig::default();
    let a = generate(&housed_params(), &config).unwrap();
    let b = generate(&housed_params(), &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.merged(), b.merged());
}

#[test]
fn posed_disk_orbits_and_counter_rotates() {
    let design = generate(&reference_params(), &GeneratorConfig::default()).unwrap();
    let derived = design.derived();
    let phi = 1.0;
    let posed = design.posed(phi);

    let disk = &posed.role(Role::Disk)[0];
    let center = disk.center();
    assert!(approx_eq(center.x, 2.0 * phi.cos(), 1e-9));
    assert!(approx_eq(center.y, 2.0 * phi.sin(), 1e-9));

    // Output pins follow the disk, turning 1/L as fast as the input shaft.
    let pin = posed.role(Role::OutputPin)[0].center();
    let angle = pin.y.atan2(pin.x);
    assert!(approx_eq(angle, -phi / derived.num_lobes as Real, 1e-9));

    assert_eq!(posed.role(Role::ExternalPin), design.geometry().role(Role::ExternalPin));
}
