//! Contour Library - Per-part export of elevation contour lines
//!
//! This library takes contour line features (a multi-part line geometry plus one elevation
//! value each) and writes every contiguous line part into its own XYZ text file. Files are
//! named after the source dataset, the elevation and a run-wide counter, so two parts with
//! the same elevation never collide.
//!
//! # Architecture
//!
//! - **[`FeatureRecord`]**: One input feature, its parts and its [`Elevation`]
//! - **[`reader`]**: GeoJSON and GPX feature readers producing lazy record streams
//! - **[`ContourExporter`]**: Flattens records, pairs vertices with elevations and writes files
//! - **[`ContourDrawing`]**: Optional DXF drawing collecting every exported part
//! - **[`load_contours`]**: Reads exported contour files back for downstream processing
//!
//! # Example
//!
//! ```rust
//! use contour_lib::{ContourExporter, Elevation, ExportConfig, FeatureRecord, OutputTarget};
//! use geo::{LineString, MultiLineString};
//!
//! # fn main() -> contour_lib::Result<()> {
//! # let dir = std::env::temp_dir();
//! let record = FeatureRecord::new(
//!     MultiLineString::new(vec![LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])]),
//!     Elevation::new(100.0).expect("finite"),
//! );
//!
//! let config = ExportConfig::new(OutputTarget::new(&dir, "contours.geojson"));
//! let mut exporter = ContourExporter::new(config);
//! let summary = exporter.export_all(vec![Ok(record)])?;
//! assert_eq!(summary.parts, 1);
//! # for path in &summary.files { let _ = std::fs::remove_file(path); }
//! # Ok(())
//! # }
//! ```

mod drawing;
mod exporter;
mod feature;
mod loader;
pub mod reader;
mod segment;
pub mod utils;
mod writer;

use std::path::PathBuf;

// Public API exports
pub use drawing::ContourDrawing;
pub use exporter::{ContourExporter, ExportConfig, ExportCounter, ExportSummary, OutputTarget};
pub use feature::{Elevation, FeatureRecord, OutputRow};
pub use loader::{ContourLine, load_contour_file, load_contours};
pub use reader::{FeatureStream, SourceFormat, open_source};
pub use segment::{flatten_parts, pair_rows};
pub use writer::write_part;

/// Error types for reading, exporting and loading contour lines
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("GeoJSON parsing error: {0}")]
    GeoJsonParse(#[from] geojson::Error),

    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported geometry in feature {record}: {kind}")]
    UnsupportedGeometry { record: usize, kind: String },

    #[error("Malformed feature {record}: {reason}")]
    MalformedRecord { record: usize, reason: String },

    #[error("Failed to write contour part {counter} (elevation {elevation}) to {path}: {source}")]
    Write {
        path: PathBuf,
        elevation: String,
        counter: u64,
        #[source]
        source: csv::Error,
    },

    #[error("DXF error for {path}: {message}")]
    Dxf { path: PathBuf, message: String },

    #[error("Invalid file mask: {0}")]
    InvalidMask(#[from] glob::PatternError),

    #[error("Failed to read contour file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid row {row} in {path}: {reason}")]
    InvalidRow {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that all public types are accessible
        let _: fn(ExportConfig) -> ContourExporter = ContourExporter::new;
        let _: fn(f64) -> Option<Elevation> = Elevation::new;
    }

    #[test]
    fn test_malformed_record_message() {
        let err = ExportError::MalformedRecord {
            record: 3,
            reason: "missing property 'Contour'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed feature 3: missing property 'Contour'"
        );
    }
}
