//! Argument value types that clap parses through `FromStr`.

use std::fmt;
use std::str::FromStr;

use roadgraph_lib::{Coordinate, Error as LibError};

/// Whitespace-separated `lat,lng` points describing one road.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline(pub Vec<Coordinate>);

impl FromStr for Polyline {
    type Err = LibError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let points = value
            .split_whitespace()
            .map(Coordinate::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if points.len() < 2 {
            return Err(LibError::InvalidCoordinate {
                value: value.to_string(),
            });
        }
        Ok(Self(points))
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for point in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{point}")?;
            first = false;
        }
        Ok(())
    }
}
