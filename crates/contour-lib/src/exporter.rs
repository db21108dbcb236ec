//! ContourExporter - Per-part export of feature records
//!
//! This module drives the export: each record is flattened into its parts, every part is
//! paired with the record's elevation and written to its own file whose name carries a
//! run-wide counter.

use crate::{
    ContourDrawing, Elevation, ExportError, FeatureRecord, OutputRow, Result, segment, utils,
    writer,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where exported files go and how they are named
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputTarget {
    /// Directory receiving the files
    pub directory: PathBuf,
    /// Base identifier prefixed to every file name
    pub base_name: String,
}

impl OutputTarget {
    /// Create a target from an explicit directory and base identifier
    pub fn new(directory: impl AsRef<Path>, base_name: impl Into<String>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            base_name: base_name.into(),
        }
    }

    /// Write next to the source dataset, using its file name as the base identifier
    pub fn beside_source(source: &Path) -> Self {
        let directory = source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::in_directory(source, directory)
    }

    /// Write into `directory`, keeping the source file name as the base identifier
    pub fn in_directory(source: &Path, directory: impl AsRef<Path>) -> Self {
        let base_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.to_string_lossy().into_owned());
        Self::new(directory, base_name)
    }

    /// Full path of the file for one part
    pub fn part_path(&self, elevation: Elevation, counter: u64) -> PathBuf {
        self.directory
            .join(utils::contour_file_name(&self.base_name, elevation, counter))
    }
}

/// Configuration for an export run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExportConfig {
    /// Output directory and base identifier
    pub target: OutputTarget,
    /// Optional DXF drawing collecting every exported part
    pub dxf_path: Option<PathBuf>,
}

impl ExportConfig {
    /// Create a configuration writing only the per-part files
    pub fn new(target: OutputTarget) -> Self {
        Self {
            target,
            dxf_path: None,
        }
    }

    /// Also write all parts into a DXF drawing at `path`
    pub fn with_dxf(mut self, path: impl Into<PathBuf>) -> Self {
        self.dxf_path = Some(path.into());
        self
    }
}

/// Run-wide sequence number making output file names unique
///
/// Starts at zero and only moves forward, one step per written part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportCounter(u64);

impl ExportCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self(0)
    }

    /// Value the next written part will receive
    #[inline]
    pub fn current(&self) -> u64 {
        self.0
    }

    #[inline]
    fn advance(&mut self) {
        self.0 += 1;
    }
}

/// Totals of an export run
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExportSummary {
    /// Records consumed from the reader
    pub records: usize,
    /// Parts written, one file each
    pub parts: usize,
    /// Rows written across all files
    pub rows: usize,
    /// Written files in counter order
    pub files: Vec<PathBuf>,
}

/// Flattens records into parts and writes each part to its own file
pub struct ContourExporter {
    config: ExportConfig,
    counter: ExportCounter,
    drawing: Option<ContourDrawing>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl ContourExporter {
    /// Create an exporter with a fresh counter
    pub fn new(config: ExportConfig) -> Self {
        let drawing = config.dxf_path.as_ref().map(|_| ContourDrawing::new());
        Self {
            config,
            counter: ExportCounter::new(),
            drawing,
        }
    }

    /// The counter as it stands
    pub fn counter(&self) -> ExportCounter {
        self.counter
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export every record of a reader stream, stopping at the first error
    ///
    /// The DXF drawing, when configured, is saved once all records have been written.
    pub fn export_all<I>(&mut self, records: I) -> Result<ExportSummary>
    where
        I: IntoIterator<Item = Result<FeatureRecord>>,
    {
        #[cfg(feature = "profiling")]
        profiling::scope!("exporter::export_all");

        let mut summary = ExportSummary::default();

        for record in records {
            let record = record?;
            let files = self.export_record(&record)?;

            summary.records += 1;
            summary.parts += files.len();
            summary.rows += files.iter().map(|(_, rows)| rows).sum::<usize>();
            summary
                .files
                .extend(files.into_iter().map(|(path, _)| path));
        }

        if let (Some(drawing), Some(path)) = (&self.drawing, &self.config.dxf_path) {
            drawing.save(path)?;
            tracing::info!(
                "Wrote DXF drawing {} ({} lines, {} points)",
                path.display(),
                drawing.line_count(),
                drawing.point_count()
            );
        }

        Ok(summary)
    }

    /// Export the parts of a single record
    ///
    /// # Returns
    /// The written paths in counter order, each with its row count
    pub fn export_record(&mut self, record: &FeatureRecord) -> Result<Vec<(PathBuf, usize)>> {
        let elevation = record.elevation();
        let mut written = Vec::with_capacity(record.part_count());
        tracing::debug!(
            "Record at {elevation}: {} parts, {} points",
            record.part_count(),
            record.total_points()
        );

        for part in segment::flatten_parts(record) {
            let rows: Vec<OutputRow> = segment::pair_rows(part, elevation).collect();
            let counter = self.counter.current();
            let path = self.config.target.part_path(elevation, counter);

            let row_count =
                writer::write_part(&path, rows.iter().copied()).map_err(|source| {
                    ExportError::Write {
                        path: path.clone(),
                        elevation: elevation.to_string(),
                        counter,
                        source,
                    }
                })?;

            if let Some(drawing) = self.drawing.as_mut() {
                drawing.add_part(&rows);
            }

            tracing::info!(
                "Exported contour {elevation} as part {counter}: {row_count} rows to {}",
                path.display()
            );
            self.counter.advance();
            written.push((path, row_count));
        }

        Ok(written)
    }
}
