//! Validation errors and warnings

use crate::curve::Role;
use crate::float_types::Real;

/// Hard-bound violations. When one of these is returned the pipeline refuses to
/// compute anything downstream and no `GeometrySet` is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (OddPinCount) The external pin count must be even
    #[error("(OddPinCount) external pin count {0} must be even")]
    OddPinCount(usize),
    /// (TooFewPins) A pin count is below the minimum the geometry needs
    #[error("(TooFewPins) {field} = {value}, at least {min} required")]
    TooFewPins {
        field: &'static str,
        value: usize,
        min: usize,
    },
    /// (OutOfRange) A value lies outside its declared bounds
    #[error("(OutOfRange) {field} = {value} lies outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: Real,
        min: Real,
        max: Real,
    },
    /// (NonPositive) A diameter, width or resolution is zero or negative
    #[error("(NonPositive) {field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: Real },
    /// (NotFinite) The value is NaN or infinite
    #[error("(NotFinite) {field} is NaN or infinite")]
    NotFinite { field: &'static str },
    /// (DegenerateRatio) The lobe count leaves a zero divisor in the circle radii
    #[error("(DegenerateRatio) lobe count {num_lobes} gives a zero divisor")]
    DegenerateRatio { num_lobes: usize },
    /// (InvalidConfig) A generator setting is unusable
    #[error("(InvalidConfig) {0}")]
    InvalidConfig(String),
}

/// Advisory findings. The pipeline still produces geometry; the caller decides
/// whether to block rendering or show a banner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationWarning {
    /// Eccentricity at or above the pin diameter undercuts the disk lobes.
    #[error("eccentricity {eccentricity} mm is not below the pin diameter {pin_diameter} mm; the disk profile will undercut")]
    EccentricityTooLarge {
        eccentricity: Real,
        pin_diameter: Real,
    },
    #[error("tolerance {tolerance} mm exceeds half the smallest pin diameter ({limit} mm); mating bodies collapse")]
    ToleranceTooLarge { tolerance: Real, limit: Real },
    /// The eccentric cam radius `(camshaft_diameter - 2e)/2` is not positive.
    #[error("camshaft diameter {camshaft_diameter} mm leaves no eccentric cam at eccentricity {eccentricity} mm")]
    CamTooSmall {
        camshaft_diameter: Real,
        eccentricity: Real,
    },
    #[error("adjacent output holes overlap: centre spacing {spacing} mm < hole diameter {hole_diameter} mm")]
    OutputHolesOverlap { spacing: Real, hole_diameter: Real },
    /// The output-hole circle reaches past the disk's smallest radius.
    #[error("output holes reach radius {reach} mm, beyond the disk root at {root} mm")]
    HolesBreachDiskRim { reach: Real, root: Real },
    /// The housing rim is no wider than a pin seat, so the pockets and the scalloped wall
    /// cut through the outer boundary.
    #[error("outer ring width {width} mm leaves no rim around pin seats of radius {seat_radius} mm")]
    HousingRimTooThin { width: Real, seat_radius: Real },
    #[error("{hole:?} clearance {clearance} mm to {body:?} is below the tolerance {tolerance} mm")]
    PartsMayBind {
        hole: Role,
        body: Role,
        clearance: Real,
        tolerance: Real,
    },
    #[error("{role:?} radius became {radius} mm after tolerance adjustment")]
    NonPositiveRadius { role: Role, radius: Real },
}
