//! roadgraph library entry points.
//!
//! This crate holds an in-memory undirected weighted graph and a Dijkstra
//! engine that answers single-source distance queries and source to
//! destination path queries. Graphs are generic over their node key, so label
//! graphs and coordinate graphs share one engine. Higher-level consumers (CLI,
//! request handlers) should only depend on the functions exported here instead
//! of reimplementing behavior.
//!

#![deny(warnings)]

pub mod coordinate;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod shared;

pub use coordinate::{Coordinate, SegmentMetric};
pub use error::{Error, Result};
pub use graph::{EdgeSpec, Graph, Neighbours, NodeKey};
pub use output::{RouteResponse, NO_PATH_MESSAGE};
pub use path::{compute_distances, compute_path, DistanceVector, PathResult};
pub use shared::SharedGraph;
