//! Feature readers
//!
//! Readers turn a source dataset into a lazy stream of [`FeatureRecord`]s. The whole document
//! is parsed when the source is opened, so unreadable files, syntax errors and unsupported
//! geometry types surface before the first record is handed out. Elevation coercion happens
//! per record while the stream is consumed.

mod geojson;
mod gpx;

use crate::{ExportError, FeatureRecord, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use self::geojson::{DEFAULT_ELEVATION_FIELD, read_geojson};
pub use self::gpx::read_gpx;

/// Lazy, ordered, non-restartable sequence of records
pub type FeatureStream = Box<dyn Iterator<Item = Result<FeatureRecord>>>;

/// Source dataset format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceFormat {
    /// Pick the format from the file extension
    #[default]
    Auto,
    GeoJson,
    Gpx,
}

impl SourceFormat {
    /// Resolve [`SourceFormat::Auto`] against the extension of `path`
    pub fn resolve(self, path: &Path) -> Result<SourceFormat> {
        if self != SourceFormat::Auto {
            return Ok(self);
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("geojson") | Some("json") => Ok(SourceFormat::GeoJson),
            Some("gpx") => Ok(SourceFormat::Gpx),
            _ => Err(ExportError::UnsupportedFormat(format!(
                "cannot infer format of {}",
                path.display()
            ))),
        }
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(SourceFormat::Auto),
            "geojson" | "json" => Ok(SourceFormat::GeoJson),
            "gpx" => Ok(SourceFormat::Gpx),
            other => Err(format!(
                "unknown format '{other}' (expected auto, geojson or gpx)"
            )),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Auto => "auto",
            SourceFormat::GeoJson => "geojson",
            SourceFormat::Gpx => "gpx",
        };
        f.write_str(name)
    }
}

/// Open a source dataset and return its records
///
/// # Arguments
/// * `path` - Source dataset
/// * `format` - Explicit format, or [`SourceFormat::Auto`] to use the file extension
/// * `elevation_field` - Attribute holding the elevation (GeoJSON only)
pub fn open_source(
    path: &Path,
    format: SourceFormat,
    elevation_field: &str,
) -> Result<FeatureStream> {
    #[cfg(feature = "profiling")]
    profiling::scope!("reader::open_source");

    let format = format.resolve(path)?;
    tracing::debug!("Opening {} as {format}", path.display());

    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);

    match format {
        SourceFormat::GeoJson => read_geojson(reader, elevation_field),
        SourceFormat::Gpx => read_gpx(reader),
        SourceFormat::Auto => Err(ExportError::UnsupportedFormat(format!(
            "cannot infer format of {}",
            path.display()
        ))),
    }
}
