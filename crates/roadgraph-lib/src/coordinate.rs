use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mean earth radius in metres used by [`Coordinate::haversine_distance`].
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Geographic node key.
///
/// Equality is exact: two coordinates that differ in the least significant bit
/// are different nodes. Snapping user input onto known nodes is the job of the
/// caller's nearest-node resolver, not of the graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Euclidean length in degree space.
    ///
    /// This is the segment length produced by planar GIS tooling when it
    /// measures unprojected line strings.
    pub fn planar_distance(&self, other: &Self) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }

    /// Great-circle distance in metres on a spherical earth.
    pub fn haversine_distance(&self, other: &Self) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let dphi = (other.lat - self.lat).to_radians();
        let dlambda = (other.lng - self.lng).to_radians();

        let a = (dphi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().min(1.0).asin()
    }

    // -0.0 and 0.0 compare equal as floats, so they must hash the same.
    fn bits(&self) -> (u64, u64) {
        (canonical_bits(self.lat), canonical_bits(self.lng))
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinate {
            value: value.to_string(),
        };

        let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
        if !lat.is_finite() || !lng.is_finite() {
            return Err(invalid());
        }

        Ok(Self { lat, lng })
    }
}

/// How the length of a polyline segment is turned into an edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentMetric {
    /// Euclidean length in degrees.
    #[default]
    Planar,
    /// Great-circle length in metres.
    Haversine,
}

impl SegmentMetric {
    /// Length of the segment between `a` and `b` under this metric.
    pub fn length(self, a: &Coordinate, b: &Coordinate) -> f64 {
        match self {
            SegmentMetric::Planar => a.planar_distance(b),
            SegmentMetric::Haversine => a.haversine_distance(b),
        }
    }
}

impl fmt::Display for SegmentMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SegmentMetric::Planar => "planar",
            SegmentMetric::Haversine => "haversine",
        };
        f.write_str(value)
    }
}
