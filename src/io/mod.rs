//! Writing merged geometry to CAD formats.
//!
//! Each format renders to an in-memory buffer first; [`export`] then swaps the buffer
//! into place through a temporary file in the destination directory, so a failed
//! export never leaves a half-written file behind.

#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "dxf-io")]
mod dxf;

#[cfg(feature = "svg-io")]
pub use self::svg::{role_style, to_svg};

#[cfg(feature = "dxf-io")]
pub use self::dxf::{layer_color, to_dxf};

use crate::merge::MergedGeometry;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output formats the exporter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Layered AutoCAD drawing exchange file.
    Dxf,
    Svg,
}

impl Format {
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Dxf => "dxf",
            Format::Svg => "svg",
        }
    }

    /// Cargo feature that enables the format.
    pub const fn feature(self) -> &'static str {
        match self {
            Format::Dxf => "dxf-io",
            Format::Svg => "svg-io",
        }
    }

    /// Guesses the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "dxf" => Some(Format::Dxf),
            "svg" => Some(Format::Svg),
            _ => None,
        }
    }
}

/// Export failures. None of them leave a partial file at the destination.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Nothing to draw.
    #[error("there is no geometry to export")]
    EmptyGeometry,
    /// The format's cargo feature is switched off.
    #[error("{} export is unavailable: build with the `{feature}` feature", format.extension())]
    Unavailable {
        format: Format,
        feature: &'static str,
    },
    /// The destination cannot be written (missing directory, permissions).
    #[error("cannot write to {}: {source}", path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while serializing.
    #[error("DXF serialization error: {0}")]
    Dxf(#[from] ::dxf::DxfError),
}

/// Renders `geometry` into the bytes of a `format` file.
pub fn render(geometry: &MergedGeometry, format: Format) -> Result<Vec<u8>, ExportError> {
    if geometry.is_empty() {
        return Err(ExportError::EmptyGeometry);
    }
    match format {
        #[cfg(feature = "dxf-io")]
        Format::Dxf => to_dxf(geometry),
        #[cfg(feature = "svg-io")]
        Format::Svg => Ok(to_svg(geometry).into_bytes()),
        #[allow(unreachable_patterns)]
        other => Err(ExportError::Unavailable {
            format: other,
            feature: other.feature(),
        }),
    }
}

/// Renders `geometry` and writes it to `path`, replacing any existing file.
pub fn export(geometry: &MergedGeometry, path: &Path, format: Format) -> Result<(), ExportError> {
    let bytes = render(geometry, format)?;
    write_atomic(path, &bytes)?;
    tracing::info!(
        path = %path.display(),
        format = format.extension(),
        bytes = bytes.len(),
        "exported geometry"
    );
    Ok(())
}

/// Writes `bytes` to a temporary file next to `path` and renames it into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let destination = |source: std::io::Error| ExportError::Destination {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(destination)?;
    fill(path, &mut file, bytes)?;
    file.persist(path).map_err(|e| destination(e.error))?;
    Ok(())
}

/// Writes and flushes `bytes` into the staging file for `path`. A short write (full
/// disk, quota) is reported against the destination.
fn fill<W: Write>(path: &Path, sink: &mut W, bytes: &[u8]) -> Result<(), ExportError> {
    sink.write_all(bytes)
        .and_then(|()| sink.flush())
        .map_err(|source| ExportError::Destination {
            path: path.to_path_buf(),
            source,
        })
}
