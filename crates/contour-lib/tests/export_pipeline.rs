//! End-to-end export from source files on disk to per-part contour files

use contour_lib::reader::DEFAULT_ELEVATION_FIELD;
use contour_lib::{
    ContourExporter, ExportConfig, ExportError, OutputTarget, SourceFormat, load_contours,
    open_source,
};
use std::path::{Path, PathBuf};

const CONTOURS_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "Contour": 100 },
      "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 0], [1, 1]] }
    },
    {
      "type": "Feature",
      "properties": { "Contour": 100 },
      "geometry": { "type": "MultiLineString", "coordinates": [[[5, 5], [6, 6]], [[7, 7]]] }
    },
    {
      "type": "Feature",
      "properties": { "Contour": 110.5 },
      "geometry": null
    },
    {
      "type": "Feature",
      "properties": { "Contour": 120 },
      "geometry": { "type": "LineString", "coordinates": [[9, 9], [8, 8], [9, 9]] }
    }
  ]
}"#;

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_geojson_export_beside_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "contours.geojson", CONTOURS_GEOJSON);

    let records = open_source(&source, SourceFormat::Auto, DEFAULT_ELEVATION_FIELD).unwrap();
    let mut exporter = ContourExporter::new(ExportConfig::new(OutputTarget::beside_source(&source)));
    let summary = exporter.export_all(records).unwrap();

    assert_eq!(summary.records, 4);
    assert_eq!(summary.parts, 4);
    assert_eq!(
        file_names(&summary.files),
        vec![
            "contours.geojson_CL_100.0_0.csv",
            "contours.geojson_CL_100.0_1.csv",
            "contours.geojson_CL_100.0_2.csv",
            "contours.geojson_CL_120.0_3.csv",
        ]
    );

    let read = |i: usize| std::fs::read_to_string(&summary.files[i]).unwrap();
    assert_eq!(read(0), "0 0 100.0\n1 0 100.0\n1 1 100.0\n");
    assert_eq!(read(1), "5 5 100.0\n6 6 100.0\n");
    assert_eq!(read(2), "7 7 100.0\n");
    assert_eq!(read(3), "9 9 120.0\n8 8 120.0\n9 9 120.0\n");
}

#[test]
fn test_every_row_carries_record_elevation() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "contours.geojson", CONTOURS_GEOJSON);

    let records = open_source(&source, SourceFormat::GeoJson, "Contour").unwrap();
    ContourExporter::new(ExportConfig::new(OutputTarget::beside_source(&source)))
        .export_all(records)
        .unwrap();

    let lines = load_contours(dir.path(), "*_CL_*.csv").unwrap();
    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert!(!line.rows.is_empty());
        assert!(line.rows.iter().all(|row| row.z == line.elevation));
    }
    assert_eq!(lines[3].elevation.value(), 120.0);
}

#[test]
fn test_gpx_export_to_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let source = write_source(
        dir.path(),
        "contours.gpx",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="contour-lib tests" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <trkseg>
      <trkpt lat="0.5" lon="0.25"><ele>200</ele></trkpt>
      <trkpt lat="1.5" lon="1.25"><ele>200</ele></trkpt>
    </trkseg>
  </trk>
</gpx>"#,
    );

    let records = open_source(&source, SourceFormat::Auto, DEFAULT_ELEVATION_FIELD).unwrap();
    let target = OutputTarget::in_directory(&source, out.path());
    let summary = ContourExporter::new(ExportConfig::new(target))
        .export_all(records)
        .unwrap();

    assert_eq!(file_names(&summary.files), vec!["contours.gpx_CL_200.0_0.csv"]);
    assert!(summary.files[0].starts_with(out.path()));
    assert_eq!(
        std::fs::read_to_string(&summary.files[0]).unwrap(),
        "0.25 0.5 200.0\n1.25 1.5 200.0\n"
    );
}

#[test]
fn test_unsupported_geometry_aborts_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(
        dir.path(),
        "mixed.geojson",
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"Contour":1},
             "geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}},
            {"type":"Feature","properties":{"Contour":2},
             "geometry":{"type":"Point","coordinates":[0,0]}}
        ]}"#,
    );

    let result = open_source(&source, SourceFormat::Auto, DEFAULT_ELEVATION_FIELD);
    assert!(matches!(
        result.err(),
        Some(ExportError::UnsupportedGeometry { record: 1, .. })
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_rerun_overwrites_same_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "contours.geojson", CONTOURS_GEOJSON);

    let run = || {
        let records = open_source(&source, SourceFormat::Auto, "Contour").unwrap();
        ContourExporter::new(ExportConfig::new(OutputTarget::beside_source(&source)))
            .export_all(records)
            .unwrap()
    };

    let first = run();
    let second = run();

    assert_eq!(first.files, second.files);
    // Source plus four contour files
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 5);
}
