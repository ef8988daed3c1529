//! Tunable resolution and export settings.
//!
//! None of these change what the gearbox *is*; they trade curve fidelity against
//! point volume. The defaults are tuned for CAD import: smooth enough to machine, light
//! enough that a kernel does not balloon on the disk spline.

use crate::errors::ValidationError;
use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// How the housing silhouette is built from the ring and the pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HousingStyle {
    /// Ring minus the (tolerance-enlarged) pin pockets: the part you cut.
    #[default]
    Pocketed,
    /// Ring plus the seated pins: the outline the disk rolls against.
    PinSilhouette,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Disk samples per lobe and per trochoid period.
    pub disk_samples_per_lobe: usize,
    /// Lower bound on disk samples per period, whatever the lobe count.
    pub min_disk_samples: usize,
    /// How far `k q` may sit from a whole number of turns and still count as closing
    /// the disk trochoid after `q` periods.
    pub closure_tolerance: Real,
    /// Most trochoid periods searched for closure before giving up.
    pub max_closure_periods: usize,
    /// Segments used for every pin, hole and cam circle.
    pub circle_segments: usize,
    /// Samples per external pin along the housing wall and outer boundary.
    pub housing_samples_per_pin: usize,
    /// Maximum deviation (mm) a point may have from its neighbours' chord and still
    /// be dropped during export. Zero disables point reduction.
    pub simplify_tolerance: Real,
    pub housing_style: HousingStyle,
    /// Blank border (mm) around the SVG drawing.
    pub svg_margin: Real,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            disk_samples_per_lobe: 60,
            min_disk_samples: 720,
            closure_tolerance: 1e-9,
            max_closure_periods: 64,
            circle_segments: 96,
            housing_samples_per_pin: 30,
            simplify_tolerance: 0.005,
            housing_style: HousingStyle::Pocketed,
            svg_margin: 10.0,
        }
    }
}

impl GeneratorConfig {
    pub const fn with_disk_samples_per_lobe(mut self, samples: usize) -> Self {
        self.disk_samples_per_lobe = samples;
        self
    }

    pub const fn with_min_disk_samples(mut self, samples: usize) -> Self {
        self.min_disk_samples = samples;
        self
    }

    pub const fn with_closure_tolerance(mut self, tolerance: Real) -> Self {
        self.closure_tolerance = tolerance;
        self
    }

    pub const fn with_max_closure_periods(mut self, periods: usize) -> Self {
        self.max_closure_periods = periods;
        self
    }

    pub const fn with_circle_segments(mut self, segments: usize) -> Self {
        self.circle_segments = segments;
        self
    }

    pub const fn with_housing_samples_per_pin(mut self, samples: usize) -> Self {
        self.housing_samples_per_pin = samples;
        self
    }

    pub const fn with_simplify_tolerance(mut self, tolerance: Real) -> Self {
        self.simplify_tolerance = tolerance;
        self
    }

    pub const fn with_housing_style(mut self, style: HousingStyle) -> Self {
        self.housing_style = style;
        self
    }

    pub const fn with_svg_margin(mut self, margin: Real) -> Self {
        self.svg_margin = margin;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.disk_samples_per_lobe == 0 {
            return Err(ValidationError::InvalidConfig(
                "disk_samples_per_lobe must be at least 1".into(),
            ));
        }
        if !self.closure_tolerance.is_finite()
            || self.closure_tolerance <= 0.0
            || self.closure_tolerance >= 0.5
        {
            return Err(ValidationError::InvalidConfig(format!(
                "closure_tolerance = {} must lie in (0, 0.5) turns",
                self.closure_tolerance
            )));
        }
        if self.max_closure_periods == 0 {
            return Err(ValidationError::InvalidConfig(
                "max_closure_periods must be at least 1".into(),
            ));
        }
        if self.circle_segments < 3 {
            return Err(ValidationError::InvalidConfig(format!(
                "circle_segments = {} cannot form a closed outline (need >= 3)",
                self.circle_segments
            )));
        }
        if self.housing_samples_per_pin < 2 {
            return Err(ValidationError::InvalidConfig(format!(
                "housing_samples_per_pin = {} cannot resolve a pin seat (need >= 2)",
                self.housing_samples_per_pin
            )));
        }
        if !self.simplify_tolerance.is_finite() || self.simplify_tolerance < 0.0 {
            return Err(ValidationError::InvalidConfig(format!(
                "simplify_tolerance = {} must be a finite, non-negative distance",
                self.simplify_tolerance
            )));
        }
        if !self.svg_margin.is_finite() || self.svg_margin < 0.0 {
            return Err(ValidationError::InvalidConfig(format!(
                "svg_margin = {} must be a finite, non-negative distance",
                self.svg_margin
            )));
        }
        Ok(())
    }
}
