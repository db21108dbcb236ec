//! GeoJSON feature reader

use super::FeatureStream;
use crate::{Elevation, ExportError, FeatureRecord, Result};
use ::geojson::{Feature, GeoJson, JsonValue, Value};
use geo::{Coord, LineString, MultiLineString};
use std::io::Read;

/// Attribute holding the contour elevation in typical contour datasets
pub const DEFAULT_ELEVATION_FIELD: &str = "Contour";

/// Parse a GeoJSON document and return its features as records
///
/// Accepts a `FeatureCollection` or a single `Feature`. Every geometry must be a
/// `LineString`, a `MultiLineString` or `null`; anything else fails before any record is
/// produced.
pub fn read_geojson<R: Read>(mut reader: R, elevation_field: &str) -> Result<FeatureStream> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let features = match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(ExportError::UnsupportedFormat(
                "bare GeoJSON geometry carries no elevation attribute".to_string(),
            ));
        }
    };

    for (index, feature) in features.iter().enumerate() {
        if let Some(geometry) = &feature.geometry {
            match &geometry.value {
                Value::LineString(_) | Value::MultiLineString(_) => {}
                other => {
                    return Err(ExportError::UnsupportedGeometry {
                        record: index,
                        kind: geometry_kind(other).to_string(),
                    });
                }
            }
        }
    }

    tracing::debug!("Parsed {} GeoJSON features", features.len());

    let elevation_field = elevation_field.to_string();
    Ok(Box::new(
        features
            .into_iter()
            .enumerate()
            .map(move |(index, feature)| convert_feature(index, feature, &elevation_field)),
    ))
}

/// Convert one GeoJSON feature into a record
fn convert_feature(index: usize, feature: Feature, elevation_field: &str) -> Result<FeatureRecord> {
    let raw = feature
        .properties
        .as_ref()
        .and_then(|properties| properties.get(elevation_field))
        .ok_or_else(|| ExportError::MalformedRecord {
            record: index,
            reason: format!("missing property '{elevation_field}'"),
        })?;

    let elevation = coerce_elevation(raw).ok_or_else(|| ExportError::MalformedRecord {
        record: index,
        reason: format!("property '{elevation_field}' is not a number: {raw}"),
    })?;

    let parts = match feature.geometry.map(|geometry| geometry.value) {
        None => Vec::new(),
        Some(Value::LineString(positions)) => vec![to_line_string(index, &positions)?],
        Some(Value::MultiLineString(lines)) => lines
            .iter()
            .map(|positions| to_line_string(index, positions))
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(ExportError::UnsupportedGeometry {
                record: index,
                kind: geometry_kind(&other).to_string(),
            });
        }
    };

    Ok(FeatureRecord::new(MultiLineString::new(parts), elevation))
}

/// Coerce a JSON attribute to an elevation
///
/// Numbers are taken as they are; strings are accepted when they parse as a number.
fn coerce_elevation(value: &JsonValue) -> Option<Elevation> {
    match value {
        JsonValue::Number(number) => number.as_f64().and_then(Elevation::new),
        JsonValue::String(text) => Elevation::parse(text),
        _ => None,
    }
}

fn to_line_string(index: usize, positions: &[Vec<f64>]) -> Result<LineString<f64>> {
    positions
        .iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(ExportError::MalformedRecord {
                record: index,
                reason: format!("position with {} ordinates", position.len()),
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
