//! Feature record storage
//!
//! This module provides the `FeatureRecord` struct holding one contour feature as produced
//! by a reader, together with the `Elevation` value type shared by all of its output rows.

use geo::MultiLineString;
use std::fmt;

/// A finite elevation value
///
/// Formatting always keeps at least one fractional digit, so integer-valued elevations read
/// from the source print as `100.0` rather than `100`. Other values use the shortest
/// representation that round-trips. Magnitudes from `1e16` upwards switch to exponent form
/// (`1e300`) so the text stays short enough for a file name.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevation(f64);

impl Elevation {
    /// Create an elevation, rejecting NaN and infinities
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// Parse an elevation from text such as an attribute value or a file field
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().and_then(Self::new)
    }

    /// The elevation as a float
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Smallest magnitude printed in exponent form
const EXPONENT_THRESHOLD: f64 = 1e16;

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.abs() >= EXPONENT_THRESHOLD {
            write!(f, "{:e}", self.0)
        } else if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One contour feature: a multi-part line geometry and the elevation of every vertex in it
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureRecord {
    /// Line parts in source order
    geometry: MultiLineString<f64>,
    /// Elevation shared by all parts
    elevation: Elevation,
}

impl FeatureRecord {
    /// Create a new record
    pub fn new(geometry: MultiLineString<f64>, elevation: Elevation) -> Self {
        Self {
            geometry,
            elevation,
        }
    }

    /// Access the raw geometry
    pub fn geometry(&self) -> &MultiLineString<f64> {
        &self.geometry
    }

    /// The record's elevation
    pub fn elevation(&self) -> Elevation {
        self.elevation
    }

    /// Number of parts in the geometry, including empty ones
    pub fn part_count(&self) -> usize {
        self.geometry.0.len()
    }

    /// Total number of vertices across all parts
    pub fn total_points(&self) -> usize {
        self.geometry.iter().map(|line| line.0.len()).sum()
    }
}

/// One exported vertex: planar coordinates plus the owning record's elevation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputRow {
    pub x: f64,
    pub y: f64,
    pub z: Elevation,
}

impl OutputRow {
    /// Squared distance to another row in plan, ignoring elevation
    #[inline]
    pub fn planar_distance_squared(&self, other: &OutputRow) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
