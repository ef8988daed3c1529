//! The end-to-end pipeline: parameters in, geometry and exports out.

use crate::config::GeneratorConfig;
use crate::derived::DerivedQuantities;
use crate::errors::{ValidationError, ValidationWarning};
use crate::float_types::Real;
use crate::geometry::GeometrySet;
use crate::io::{self, ExportError, Format};
use crate::merge::{self, MergedGeometry};
use crate::params::DesignParameters;
use crate::{sampler, tolerance};
use std::path::Path;

/// One immutable snapshot of a generated design.
///
/// Built by [`generate`]; holds everything the UI layer draws and the exporter writes.
/// Changing a parameter means calling [`generate`] again.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    params: DesignParameters,
    config: GeneratorConfig,
    derived: DerivedQuantities,
    nominal: GeometrySet,
    geometry: GeometrySet,
    warnings: Vec<ValidationWarning>,
}

/// Validates `params` and `config`, then samples and tolerance-adjusts the geometry.
///
/// A hard-bound violation stops here with no geometry; soft problems end up in
/// [`Design::warnings`].
pub fn generate(
    params: &DesignParameters,
    config: &GeneratorConfig,
) -> Result<Design, ValidationError> {
    config.validate()?;
    let mut warnings = params.validate()?;
    let derived = DerivedQuantities::compute(params)?;

    let nominal = sampler::sample(params, &derived, config);
    let geometry = tolerance::apply(&nominal, params.tolerance())?;
    warnings.extend(tolerance::clearance_warnings(&geometry, params.tolerance()));

    for warning in &warnings {
        tracing::warn!(%warning, "design warning");
    }
    tracing::debug!(
        pins = params.num_external_pins(),
        lobes = derived.num_lobes,
        curves = geometry.len(),
        warnings = warnings.len(),
        "generated design"
    );

    Ok(Design {
        params: *params,
        config: *config,
        derived,
        nominal,
        geometry,
        warnings,
    })
}

impl Design {
    pub const fn params(&self) -> &DesignParameters {
        &self.params
    }

    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub const fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// Geometry before tolerance adjustment.
    pub const fn nominal(&self) -> &GeometrySet {
        &self.nominal
    }

    /// Tolerance-adjusted geometry in the base pose; what the UI draws.
    pub const fn geometry(&self) -> &GeometrySet {
        &self.geometry
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// The adjusted geometry at input-shaft angle `phi` (radians).
    pub fn posed(&self, phi: Real) -> GeometrySet {
        self.geometry.posed(phi, &self.derived)
    }

    /// Export-ready geometry in the base pose.
    pub fn merged(&self) -> MergedGeometry {
        merge::merge(&self.geometry, &self.config)
    }

    /// Export-ready geometry at input-shaft angle `phi`.
    pub fn merged_at(&self, phi: Real) -> MergedGeometry {
        merge::merge(&self.posed(phi), &self.config)
    }

    /// Renders the base pose to the bytes of a `format` file.
    pub fn render(&self, format: Format) -> Result<Vec<u8>, ExportError> {
        io::render(&self.merged(), format)
    }

    /// Writes the base pose to `path`.
    pub fn export(&self, path: &Path, format: Format) -> Result<(), ExportError> {
        io::export(&self.merged(), path, format)
    }

    /// Writes the design as it stands at input-shaft angle `phi` to `path`.
    pub fn export_at(&self, phi: Real, path: &Path, format: Format) -> Result<(), ExportError> {
        io::export(&self.merged_at(phi), path, format)
    }
}
