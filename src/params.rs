//! The design inputs of a cycloidal gearbox.
//!
//! [`DesignParameters`] is a value object: every `with_*` setter validates the one
//! field it touches and hands back a new value, so a `DesignParameters` that made it
//! through construction is always within its hard bounds. Soft problems (an
//! eccentricity that undercuts the lobes, a tolerance that collapses the pins) are
//! reported by [`DesignParameters::warnings`] and never block the pipeline.

use crate::derived::{self, DerivedQuantities};
use crate::errors::{ValidationError, ValidationWarning};
use crate::float_types::{PI, Real};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Every recognised design input, with its unit, hard range and UI step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    NumExternalPins,
    NumOutputPins,
    PinDiameter,
    RingDiameter,
    Eccentricity,
    OutputPinDiameter,
    OutputDiskDiameter,
    CamshaftDiameter,
    Tolerance,
    OuterRingWidth,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Eccentricity,
        Field::NumExternalPins,
        Field::PinDiameter,
        Field::RingDiameter,
        Field::NumOutputPins,
        Field::OutputPinDiameter,
        Field::OutputDiskDiameter,
        Field::CamshaftDiameter,
        Field::Tolerance,
        Field::OuterRingWidth,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Field::NumExternalPins => "num_external_pins",
            Field::NumOutputPins => "num_output_pins",
            Field::PinDiameter => "pin_diameter",
            Field::RingDiameter => "ring_diameter",
            Field::Eccentricity => "eccentricity",
            Field::OutputPinDiameter => "output_pin_diameter",
            Field::OutputDiskDiameter => "output_disk_diameter",
            Field::CamshaftDiameter => "camshaft_diameter",
            Field::Tolerance => "tolerance",
            Field::OuterRingWidth => "outer_ring_width",
        }
    }

    /// Unit label, empty for counts.
    pub const fn unit(self) -> &'static str {
        match self {
            Field::NumExternalPins | Field::NumOutputPins => "",
            _ => "mm",
        }
    }

    /// Hard bounds. Values outside are a [`ValidationError::OutOfRange`].
    pub const fn range(self) -> RangeInclusive<Real> {
        match self {
            Field::NumExternalPins => 3.0..=100.0,
            Field::NumOutputPins => 3.0..=45.0,
            Field::PinDiameter => 2.0..=25.0,
            Field::RingDiameter => 20.0..=250.0,
            Field::Eccentricity => 0.5..=10.0,
            Field::OutputPinDiameter => 0.5..=25.0,
            Field::OutputDiskDiameter => 1.0..=150.0,
            Field::CamshaftDiameter => 1.0..=50.0,
            Field::Tolerance => 0.01..=2.0,
            Field::OuterRingWidth => 1.0..=50.0,
        }
    }

    /// Slider increment used by the interactive designer.
    pub const fn step(self) -> Real {
        match self {
            Field::NumExternalPins | Field::NumOutputPins | Field::RingDiameter => 1.0,
            Field::Eccentricity | Field::OutputPinDiameter => 0.1,
            Field::Tolerance => 0.01,
            _ => 0.5,
        }
    }

    fn check(self, value: Real) -> Result<Real, ValidationError> {
        let field = self.name();
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositive { field, value });
        }
        let range = self.range();
        if !range.contains(&value) {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(value)
    }

    fn check_count(self, value: usize) -> Result<usize, ValidationError> {
        let field = self.name();
        let range = self.range();
        let min = *range.start() as usize;
        if value < min {
            return Err(ValidationError::TooFewPins { field, value, min });
        }
        if value as Real > *range.end() {
            return Err(ValidationError::OutOfRange {
                field,
                value: value as Real,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(value)
    }
}

/// Rounds an odd pin count up to the next even value, the way the designer's
/// pin-count slider snaps.
pub const fn even_pin_count(count: usize) -> usize {
    if count % 2 == 0 { count } else { count + 1 }
}

/// Validated design inputs. All lengths are millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    num_external_pins: usize,
    num_output_pins: usize,
    pin_diameter: Real,
    ring_diameter: Real,
    eccentricity: Real,
    output_pin_diameter: Real,
    output_disk_diameter: Real,
    camshaft_diameter: Real,
    tolerance: Real,
    show_outer_ring: bool,
    outer_ring_width: Real,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            num_external_pins: 24,
            num_output_pins: 7,
            pin_diameter: 5.0,
            ring_diameter: 80.0,
            eccentricity: 1.4,
            output_pin_diameter: 10.0,
            output_disk_diameter: 50.0,
            camshaft_diameter: 20.0,
            tolerance: 0.2,
            show_outer_ring: false,
            outer_ring_width: 15.0,
        }
    }
}

impl DesignParameters {
    pub const fn num_external_pins(&self) -> usize {
        self.num_external_pins
    }
    pub const fn num_output_pins(&self) -> usize {
        self.num_output_pins
    }
    pub const fn pin_diameter(&self) -> Real {
        self.pin_diameter
    }
    pub const fn ring_diameter(&self) -> Real {
        self.ring_diameter
    }
    pub const fn eccentricity(&self) -> Real {
        self.eccentricity
    }
    pub const fn output_pin_diameter(&self) -> Real {
        self.output_pin_diameter
    }
    pub const fn output_disk_diameter(&self) -> Real {
        self.output_disk_diameter
    }
    pub const fn camshaft_diameter(&self) -> Real {
        self.camshaft_diameter
    }
    pub const fn tolerance(&self) -> Real {
        self.tolerance
    }
    pub const fn show_outer_ring(&self) -> bool {
        self.show_outer_ring
    }
    pub const fn outer_ring_width(&self) -> Real {
        self.outer_ring_width
    }

    /// Sets the external pin count. Odd counts are rejected; use
    /// [`even_pin_count`] to snap UI input first.
    pub fn with_external_pins(mut self, count: usize) -> Result<Self, ValidationError> {
        self.num_external_pins = check_external_pins(count)?;
        Ok(self)
    }

    pub fn with_output_pins(mut self, count: usize) -> Result<Self, ValidationError> {
        self.num_output_pins = Field::NumOutputPins.check_count(count)?;
        Ok(self)
    }

    pub fn with_pin_diameter(mut self, value: Real) -> Result<Self, ValidationError> {
        self.pin_diameter = Field::PinDiameter.check(value)?;
        Ok(self)
    }

    pub fn with_ring_diameter(mut self, value: Real) -> Result<Self, ValidationError> {
        self.ring_diameter = Field::RingDiameter.check(value)?;
        Ok(self)
    }

    pub fn with_eccentricity(mut self, value: Real) -> Result<Self, ValidationError> {
        self.eccentricity = Field::Eccentricity.check(value)?;
        Ok(self)
    }

    pub fn with_output_pin_diameter(mut self, value: Real) -> Result<Self, ValidationError> {
        self.output_pin_diameter = Field::OutputPinDiameter.check(value)?;
        Ok(self)
    }

    pub fn with_output_disk_diameter(mut self, value: Real) -> Result<Self, ValidationError> {
        self.output_disk_diameter = Field::OutputDiskDiameter.check(value)?;
        Ok(self)
    }

    pub fn with_camshaft_diameter(mut self, value: Real) -> Result<Self, ValidationError> {
        self.camshaft_diameter = Field::CamshaftDiameter.check(value)?;
        Ok(self)
    }

    pub fn with_tolerance(mut self, value: Real) -> Result<Self, ValidationError> {
        self.tolerance = Field::Tolerance.check(value)?;
        Ok(self)
    }

    pub const fn with_outer_ring(mut self, show: bool) -> Self {
        self.show_outer_ring = show;
        self
    }

    pub fn with_outer_ring_width(mut self, value: Real) -> Result<Self, ValidationError> {
        self.outer_ring_width = Field::OuterRingWidth.check(value)?;
        Ok(self)
    }

    /// Re-checks every field against its hard bounds and collects the soft findings.
    ///
    /// Values built through the `with_*` setters always pass; this exists for values
    /// that arrived some other way (deserialized presets).
    pub fn validate(&self) -> Result<Vec<ValidationWarning>, ValidationError> {
        check_external_pins(self.num_external_pins)?;
        Field::NumOutputPins.check_count(self.num_output_pins)?;
        Field::PinDiameter.check(self.pin_diameter)?;
        Field::RingDiameter.check(self.ring_diameter)?;
        Field::Eccentricity.check(self.eccentricity)?;
        Field::OutputPinDiameter.check(self.output_pin_diameter)?;
        Field::OutputDiskDiameter.check(self.output_disk_diameter)?;
        Field::CamshaftDiameter.check(self.camshaft_diameter)?;
        Field::Tolerance.check(self.tolerance)?;
        Field::OuterRingWidth.check(self.outer_ring_width)?;
        Ok(self.warnings())
    }

    /// Dimensional sanity checks that do not stop geometry generation.
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let e = self.eccentricity;
        let tol = self.tolerance;

        if e >= self.pin_diameter {
            warnings.push(ValidationWarning::EccentricityTooLarge {
                eccentricity: e,
                pin_diameter: self.pin_diameter,
            });
        }

        let limit = 0.5 * self.pin_diameter.min(self.output_pin_diameter);
        if tol > limit {
            warnings.push(ValidationWarning::ToleranceTooLarge { tolerance: tol, limit });
        }

        if self.camshaft_diameter - 2.0 * e <= 0.0 {
            warnings.push(ValidationWarning::CamTooSmall {
                camshaft_diameter: self.camshaft_diameter,
                eccentricity: e,
            });
        }

        let hole_radius = 0.5 * self.output_pin_diameter + e + tol;
        let pitch_radius = 0.5 * self.output_disk_diameter;
        let spacing = 2.0 * pitch_radius * (PI / self.num_output_pins as Real).sin();
        if spacing < 2.0 * hole_radius {
            warnings.push(ValidationWarning::OutputHolesOverlap {
                spacing,
                hole_diameter: 2.0 * hole_radius,
            });
        }

        // The trochoid dips to R - e; the contact offset takes another pin radius off.
        let root = 0.5 * self.ring_diameter - e - 0.5 * self.pin_diameter - tol;
        let reach = pitch_radius + hole_radius;
        if reach >= root {
            warnings.push(ValidationWarning::HolesBreachDiskRim { reach, root });
        }

        let seat_radius = 0.5 * self.pin_diameter + tol;
        if self.show_outer_ring && self.outer_ring_width <= seat_radius {
            warnings.push(ValidationWarning::HousingRimTooThin {
                width: self.outer_ring_width,
                seat_radius,
            });
        }

        warnings
    }

    /// Replaces `ring_diameter` and `output_disk_diameter` with the values
    /// [`derived::normalize`] computes from the pin count and pin diameter, rounded
    /// to 0.1 mm.
    pub fn normalized(mut self) -> Result<Self, ValidationError> {
        let normalized = derived::normalize(self.num_external_pins, self.pin_diameter);
        self.ring_diameter = Field::RingDiameter.check(round_tenth(normalized.ring_diameter))?;
        self.output_disk_diameter =
            Field::OutputDiskDiameter.check(round_tenth(normalized.output_disk_diameter))?;
        Ok(self)
    }

    /// Shorthand for [`DerivedQuantities::compute`].
    pub fn derived(&self) -> Result<DerivedQuantities, ValidationError> {
        DerivedQuantities::compute(self)
    }
}

fn check_external_pins(count: usize) -> Result<usize, ValidationError> {
    let count = Field::NumExternalPins.check_count(count)?;
    if count % 2 != 0 {
        return Err(ValidationError::OddPinCount(count));
    }
    Ok(count)
}

fn round_tenth(value: Real) -> Real {
    (value * 10.0).round() / 10.0
}
