//! Test support library
//! Shared parameter sets and float helpers for the integration tests.

#![allow(dead_code)]

use cycloidrs::{DesignParameters, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The reference gearbox: 24 pins of 6 mm on a 100 mm ring, 2 mm eccentricity,
/// six 5 mm output pins on 65 mm, 10 mm camshaft, 0.15 mm clearance.
pub fn reference_params() -> DesignParameters {
    DesignParameters::default()
        .with_external_pins(24)
        .and_then(|p| p.with_pin_diameter(6.0))
        .and_then(|p| p.with_ring_diameter(100.0))
        .and_then(|p| p.with_eccentricity(2.0))
        .and_then(|p| p.with_output_pins(6))
        .and_then(|p| p.with_output_pin_diameter(5.0))
        .and_then(|p| p.with_output_disk_diameter(65.0))
        .and_then(|p| p.with_camshaft_diameter(10.0))
        .and_then(|p| p.with_tolerance(0.15))
        .expect("reference parameters are within bounds")
}

/// The reference gearbox with its housing shown.
pub fn housed_params() -> DesignParameters {
    reference_params().with_outer_ring(true)
}

/// A spread of valid designs: pin counts from 4 to 60 with the ring sized to fit.
pub fn design_sweep() -> Vec<DesignParameters> {
    (4..=60)
        .step_by(8)
        .map(|pins| {
            DesignParameters::default()
                .with_external_pins(pins)
                .and_then(|p| p.with_pin_diameter(4.0))
                .and_then(|p| p.with_eccentricity(1.0))
                .and_then(|p| p.with_output_disk_diameter(10.0))
                .and_then(|p| p.with_output_pin_diameter(2.0))
                .and_then(|p| p.with_output_pins(4))
                .and_then(|p| p.with_camshaft_diameter(4.0))
                .and_then(|p| p.with_ring_diameter((pins as Real * 4.0).max(40.0)))
                .expect("sweep parameters are within bounds")
        })
        .collect()
}
