//! Utility functions for output file naming and coordinate formatting

use crate::Elevation;

/// Separator between the base identifier and the elevation in output file names
pub const CONTOUR_TAG: &str = "_CL_";

/// Extension of exported contour files
pub const CONTOUR_EXTENSION: &str = "csv";

/// Squared planar distance below which two consecutive vertices are considered the same
pub const DUPLICATE_TOLERANCE_SQUARED: f64 = 0.001;

/// Build the file name of one exported part
///
/// # Arguments
/// * `base` - Base identifier, usually the source file name including its extension
/// * `elevation` - Elevation shared by every row of the part
/// * `counter` - Export counter value assigned to the part
///
/// # Returns
/// `<base>_CL_<elevation>_<counter>.csv`
#[inline]
pub fn contour_file_name(base: &str, elevation: Elevation, counter: u64) -> String {
    format!("{base}{CONTOUR_TAG}{elevation}_{counter}.{CONTOUR_EXTENSION}")
}

/// Split an exported file name back into its elevation and counter
///
/// Returns `None` for names that were not produced by [`contour_file_name`].
pub fn parse_contour_file_name(file_name: &str) -> Option<(Elevation, u64)> {
    let stem = file_name.strip_suffix(&format!(".{CONTOUR_EXTENSION}"))?;
    let tagged = &stem[stem.rfind(CONTOUR_TAG)? + CONTOUR_TAG.len()..];
    let (elevation, counter) = tagged.rsplit_once('_')?;
    Some((Elevation::parse(elevation)?, counter.parse().ok()?))
}

/// Format a planar coordinate using the shortest representation that round-trips
#[inline(always)]
pub fn format_coordinate(value: f64) -> String {
    value.to_string()
}
