//! GPX feature reader
//!
//! Each track becomes one record and each track segment one part. GPX has no feature
//! attributes, so the elevation is taken from the `<ele>` of the track's first waypoint.

use super::FeatureStream;
use crate::{Elevation, ExportError, FeatureRecord, Result};
use geo::{LineString, MultiLineString};
use std::io::Read;

/// Parse a GPX document and return its tracks as records
pub fn read_gpx<R: Read>(reader: R) -> Result<FeatureStream> {
    let gpx_data = ::gpx::read(reader)?;
    tracing::debug!("Parsed {} GPX tracks", gpx_data.tracks.len());

    Ok(Box::new(
        gpx_data
            .tracks
            .into_iter()
            .enumerate()
            .filter_map(|(index, track)| convert_track(index, track).transpose()),
    ))
}

/// Convert one track into a record, or `None` for a track without any waypoint
fn convert_track(index: usize, track: ::gpx::Track) -> Result<Option<FeatureRecord>> {
    let Some(first) = track
        .segments
        .iter()
        .find_map(|segment| segment.points.first())
    else {
        tracing::debug!("Skipping GPX track {index} without waypoints");
        return Ok(None);
    };

    let elevation = first
        .elevation
        .and_then(Elevation::new)
        .ok_or_else(|| ExportError::MalformedRecord {
            record: index,
            reason: "first waypoint has no valid <ele>".to_string(),
        })?;

    let parts = track
        .segments
        .iter()
        .map(|segment| {
            segment
                .points
                .iter()
                .map(|waypoint| waypoint.point().0)
                .collect::<LineString<f64>>()
        })
        .collect();

    Ok(Some(FeatureRecord::new(
        MultiLineString::new(parts),
        elevation,
    )))
}
