//! Output formatting for query results.
//!
//! Each renderer returns the full text to print so handlers stay free of
//! formatting details and tests can check output without spawning a process.

use std::fmt::{Display, Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use roadgraph_lib::{Coordinate, DistanceVector, NodeKey, PathResult, RouteResponse};

/// Supported output formats for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Serialize)]
struct DistancesDocument<'a, K> {
    source: &'a str,
    distances: &'a DistanceVector<K>,
}

#[derive(Serialize)]
struct PathDocument<'a, K> {
    source: &'a str,
    destination: &'a str,
    path: &'a [K],
    distance: Option<f64>,
}

/// Render a distance vector.
pub fn render_distances<K>(
    format: OutputFormat,
    source: &str,
    distances: &DistanceVector<K>,
) -> Result<String>
where
    K: NodeKey + Serialize,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&DistancesDocument {
            source,
            distances,
        })?),
        OutputFormat::Text => {
            let width = distances
                .iter()
                .map(|(node, _)| node.to_string().len())
                .max()
                .unwrap_or(0);
            let mut out = format!("Distances from {source}:\n");
            for (node, distance) in distances.iter() {
                writeln!(out, "  {:<width$}  {}", node.to_string(), distance)?;
            }
            Ok(out)
        }
    }
}

/// Render a label path query result.
pub fn render_path<K>(
    format: OutputFormat,
    source: &str,
    destination: &str,
    result: &PathResult<K>,
) -> Result<String>
where
    K: NodeKey + Serialize,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&PathDocument {
            source,
            destination,
            path: &result.path,
            distance: result.distance,
        })?),
        OutputFormat::Text => match result.distance {
            Some(distance) => Ok(format!(
                "Path {source} -> {destination} ({} hops, distance {distance}):\n{}",
                result.hop_count(),
                join_lines(&result.path)
            )),
            None => Ok(format!("No path found from {source} to {destination}\n")),
        },
    }
}

/// Render a coordinate route as the consumer-facing payload.
pub fn render_route(format: OutputFormat, result: &PathResult<Coordinate>) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let response = RouteResponse::from_result(result);
            Ok(format!("{}\n", serde_json::to_string(&response)?))
        }
        OutputFormat::Text => match result.distance {
            Some(distance) => Ok(format!(
                "Route ({} hops, distance {distance}):\n{}",
                result.hop_count(),
                join_lines(&result.path)
            )),
            None => Ok(format!("{}\n", roadgraph_lib::NO_PATH_MESSAGE)),
        },
    }
}

fn join_lines<T: Display>(items: &[T]) -> String {
    items.iter().fold(String::new(), |mut out, item| {
        let _ = writeln!(out, "  {item}");
        out
    })
}
