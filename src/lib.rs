//! Parametric 2D profiles for **cycloidal gearboxes**.
//!
//! From a handful of design inputs (pin count, ring and pin diameters, eccentricity, output
//! pins, camshaft) this crate samples the cycloidal disk, the pin and hole circles, the
//! eccentric cam and an optional housing, applies a fit clearance, merges the housing into a
//! single silhouette and writes the lot to layered DXF or SVG.
//!
//! ```no_run
//! use cycloidrs::{DesignParameters, GeneratorConfig, generate, io::Format};
//!
//! let params = DesignParameters::default().with_external_pins(30)?.normalized()?;
//! let design = generate(&params, &GeneratorConfig::default())?;
//! println!("reduction {:.3}:1", design.derived().reduction_ratio);
//! design.export("gearbox.dxf".as_ref(), Format::Dxf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every stage is a pure function of its inputs: [`params`] → [`derived`] → [`sampler`] →
//! [`tolerance`] → [`merge`] → [`io`]. [`pipeline::generate`] runs them in order.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): layered `.dxf` export
//! - **svg-io**: `.svg` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: sample curve roles on rayon's thread pool

#![forbid(unsafe_code)]
#![warn(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod curve;
pub mod derived;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;
pub mod merge;
pub mod params;
pub mod pipeline;
pub mod sampler;
pub mod tolerance;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::{GeneratorConfig, HousingStyle};
pub use curve::{Curve, Role};
pub use derived::DerivedQuantities;
pub use errors::{ValidationError, ValidationWarning};
pub use geometry::GeometrySet;
pub use merge::{MergedGeometry, MergedSilhouette};
pub use params::{DesignParameters, Field};
pub use pipeline::{Design, generate};
