//! Part flattening and coordinate/elevation pairing

use crate::{Elevation, FeatureRecord, OutputRow};
use geo::LineString;

/// Iterate over the parts of a record in source order
///
/// Parts without any vertex are skipped: they cannot produce a row, so they never reach the
/// writer and never consume a counter value.
pub fn flatten_parts(record: &FeatureRecord) -> impl Iterator<Item = &LineString<f64>> {
    record
        .geometry()
        .iter()
        .enumerate()
        .filter_map(move |(index, part)| {
            if part.0.is_empty() {
                tracing::debug!("Skipping empty part {index} at elevation {}", record.elevation());
                None
            } else {
                Some(part)
            }
        })
}

/// Pair every vertex of a part with the elevation, keeping vertex order
pub fn pair_rows(part: &LineString<f64>, elevation: Elevation) -> impl Iterator<Item = OutputRow> {
    part.coords().map(move |coord| OutputRow {
        x: coord.x,
        y: coord.y,
        z: elevation,
    })
}
