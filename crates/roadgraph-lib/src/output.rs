use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::path::PathResult;

/// Message returned to route consumers when the destination cannot be reached.
pub const NO_PATH_MESSAGE: &str = "No path found";

/// Payload handed to route consumers.
///
/// Serialises as `{"path": [{"lat": .., "lng": ..}, ..], "distance": ..}` for
/// a found route and `{"error": ".."}` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteResponse {
    Found {
        path: Vec<Coordinate>,
        distance: f64,
    },
    Error {
        error: String,
    },
}

impl RouteResponse {
    /// Convert a coordinate path query result into a response payload.
    pub fn from_result(result: &PathResult<Coordinate>) -> Self {
        match result.distance {
            Some(distance) => RouteResponse::Found {
                path: result.path.clone(),
                distance,
            },
            None => RouteResponse::error(NO_PATH_MESSAGE),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        RouteResponse::Error {
            error: message.into(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteResponse::Found { .. })
    }
}

impl From<PathResult<Coordinate>> for RouteResponse {
    fn from(result: PathResult<Coordinate>) -> Self {
        match result.distance {
            Some(distance) => RouteResponse::Found {
                path: result.path,
                distance,
            },
            None => RouteResponse::error(NO_PATH_MESSAGE),
        }
    }
}
