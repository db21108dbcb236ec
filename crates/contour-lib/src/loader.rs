//! Loading of exported contour files
//!
//! Reads per-part XYZ files back into memory, e.g. for a later smoothing or simplification
//! step. Files are selected by a wildcard mask and parsed in parallel.

use crate::{Elevation, ExportError, OutputRow, Result, utils};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// One contour line loaded from an exported file
#[derive(Debug, Clone, PartialEq)]
pub struct ContourLine {
    /// File the line was read from
    pub path: PathBuf,
    /// Elevation of the first row
    pub elevation: Elevation,
    /// Vertices with consecutive planar duplicates removed
    pub rows: Vec<OutputRow>,
}

/// Load every file in `directory` whose name matches `mask`
///
/// The mask supports `*` and `?` wildcards, e.g. `*_CL_*.csv`. Lines are returned in
/// export counter order; files whose names carry no counter come last, sorted by path.
pub fn load_contours(directory: &Path, mask: &str) -> Result<Vec<ContourLine>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("loader::load_contours");

    let pattern = glob::Pattern::new(mask)?;

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if pattern.matches(&entry.file_name().to_string_lossy()) {
            paths.push(entry.path());
        }
    }

    paths.sort_by_cached_key(|path| {
        let counter = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(utils::parse_contour_file_name)
            .map(|(_, counter)| counter);
        (counter.is_none(), counter, path.clone())
    });

    tracing::debug!(
        "Loading {} contour files from {}",
        paths.len(),
        directory.display()
    );

    paths.into_par_iter().map(load_contour_file).collect()
}

/// Load a single exported contour file
pub fn load_contour_file(path: PathBuf) -> Result<ContourLine> {
    // Separator runs and tabs yield empty or compound fields, re-split in `parse_row`
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(|source| ExportError::Load {
            path: path.clone(),
            source,
        })?;

    let mut rows: Vec<OutputRow> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| ExportError::Load {
            path: path.clone(),
            source,
        })?;
        let row = parse_row(&record).ok_or_else(|| ExportError::InvalidRow {
            path: path.clone(),
            row: index + 1,
            reason: format!(
                "expected three numeric fields, got '{}'",
                record.iter().collect::<Vec<_>>().join(" ")
            ),
        })?;

        // Drop vertices coinciding in plan with their predecessor
        let duplicate = rows.last().is_some_and(|last| {
            last.planar_distance_squared(&row) < utils::DUPLICATE_TOLERANCE_SQUARED
        });
        if !duplicate {
            rows.push(row);
        }
    }

    let Some(first) = rows.first() else {
        return Err(ExportError::InvalidRow {
            path,
            row: 0,
            reason: "file contains no rows".to_string(),
        });
    };

    Ok(ContourLine {
        elevation: first.z,
        path,
        rows,
    })
}

/// Parse one row whose values are separated by any run of spaces or tabs
fn parse_row(record: &csv::StringRecord) -> Option<OutputRow> {
    let mut fields = record.iter().flat_map(str::split_ascii_whitespace);
    let row = OutputRow {
        x: fields.next()?.parse().ok()?,
        y: fields.next()?.parse().ok()?,
        z: Elevation::parse(fields.next()?)?,
    };
    fields.next().is_none().then_some(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_orders_by_counter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("c.shp_CL_100.0_10.csv"),
            "0 0 100.0\n1 1 100.0\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("c.shp_CL_90.0_2.csv"), "5 5 90.0\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a contour\n").unwrap();

        let lines = load_contours(dir.path(), "*_CL_*.csv").unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].elevation.value(), 90.0);
        assert_eq!(lines[1].elevation.value(), 100.0);
        assert_eq!(lines[1].rows.len(), 2);
    }

    #[test]
    fn test_consecutive_duplicates_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line_CL_5.0_0.csv");
        std::fs::write(&path, "0 0 5.0\n0.01 0 5.0\n1 0 5.0\n0 0 5.0\n").unwrap();

        let line = load_contour_file(path).unwrap();
        let xs: Vec<f64> = line.rows.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_invalid_row_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_CL_5.0_0.csv");
        std::fs::write(&path, "0 0 5.0\n1 x 5.0\n").unwrap();

        assert!(matches!(
            load_contour_file(path),
            Err(ExportError::InvalidRow { row: 2, .. })
        ));
    }

    #[test]
    fn test_tabs_and_separator_runs_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aligned_CL_5.0_0.csv");
        std::fs::write(&path, "0\t0\t5.0\n1  1 5.0\n  2 \t 2   5.0  \n").unwrap();

        let line = load_contour_file(path).unwrap();
        let coords: Vec<(f64, f64)> = line.rows.iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(coords, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(line.rows.iter().all(|r| r.z.value() == 5.0));
    }

    #[test]
    fn test_extra_field_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide_CL_5.0_0.csv");
        std::fs::write(&path, "0 0 5.0 9\n").unwrap();

        assert!(matches!(
            load_contour_file(path),
            Err(ExportError::InvalidRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty_CL_5.0_0.csv");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(
            load_contour_file(path),
            Err(ExportError::InvalidRow { row: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_mask() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_contours(dir.path(), "[*.csv"),
            Err(ExportError::InvalidMask(_))
        ));
    }
}
