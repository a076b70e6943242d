use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use tracing::{trace, warn};

use crate::coordinate::{Coordinate, SegmentMetric};
use crate::error::{Error, Result};

/// Identity of a vertex.
///
/// Any cloneable, hashable value with a printable form can key a graph; the
/// library ships label (`String` / `&str`) and [`Coordinate`] keys.
pub trait NodeKey: Clone + Eq + Hash + fmt::Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + fmt::Display {}

/// Dense index assigned to each node in first-seen order.
pub(crate) type NodeIndex = usize;

/// Half of an undirected edge as stored in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    pub target: NodeIndex,
    pub weight: f64,
}

/// Undirected weighted graph keyed by `K`.
///
/// Nodes exist implicitly once an edge mentions them. Keys are interned into
/// dense indices so traversal state can live in plain vectors and iteration
/// order follows insertion order.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    index: HashMap<K, NodeIndex>,
    keys: Vec<K>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            keys: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<K: NodeKey> Graph<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` vertices.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            index: HashMap::with_capacity(nodes),
            keys: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Build a graph from `(from, to, weight)` triples, stopping at the first
    /// invalid weight.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, K, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Insert an undirected edge between `from` and `to`.
    ///
    /// Weights must be finite and non-negative; a rejected edge leaves the
    /// graph untouched, including not registering its endpoints. Parallel
    /// edges are kept.
    pub fn add_edge(&mut self, from: K, to: K, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            warn!(%from, %to, weight, "rejecting edge with invalid weight");
            return Err(Error::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        trace!(%from, %to, weight, "adding edge");
        let a = self.intern(from);
        let b = self.intern(to);
        self.adjacency[a].push(Edge { target: b, weight });
        if a != b {
            self.adjacency[b].push(Edge { target: a, weight });
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Whether any edge mentions `node`.
    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(node)
    }

    /// Edges incident to `node` in insertion order. Unknown nodes have none.
    pub fn neighbours<Q>(&self, node: &Q) -> Neighbours<'_, K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let edges = self
            .index_of(node)
            .map(|index| self.adjacency[index].as_slice())
            .unwrap_or(&[]);
        Neighbours {
            keys: &self.keys,
            edges: edges.iter(),
        }
    }

    /// Nodes in the order they were first mentioned.
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys.iter()
    }

    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of successful [`Graph::add_edge`] calls.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn index_of<Q>(&self, node: &Q) -> Option<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(node).copied()
    }

    pub(crate) fn key(&self, index: NodeIndex) -> &K {
        &self.keys[index]
    }

    pub(crate) fn edges(&self, index: NodeIndex) -> &[Edge] {
        &self.adjacency[index]
    }

    fn intern(&mut self, key: K) -> NodeIndex {
        if let Some(&index) = self.index.get(&key) {
            return index;
        }
        let index = self.keys.len();
        self.index.insert(key.clone(), index);
        self.keys.push(key);
        self.adjacency.push(Vec::new());
        index
    }
}

/// Iterator over `(neighbour, weight)` pairs returned by [`Graph::neighbours`].
#[derive(Debug, Clone)]
pub struct Neighbours<'a, K> {
    keys: &'a [K],
    edges: std::slice::Iter<'a, Edge>,
}

impl<'a, K> Iterator for Neighbours<'a, K> {
    type Item = (&'a K, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let keys = self.keys;
        self.edges
            .next()
            .map(move |edge| (&keys[edge.target], edge.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<K> ExactSizeIterator for Neighbours<'_, K> {}

impl Graph<Coordinate> {
    /// Add one edge per consecutive pair of `points`, weighted by segment
    /// length under `metric`. Returns the number of edges added.
    ///
    /// All segments are validated before any is inserted, so a polyline with
    /// a non-finite coordinate is rejected as a whole.
    pub fn add_polyline(&mut self, points: &[Coordinate], metric: SegmentMetric) -> Result<usize> {
        let segments: Vec<(Coordinate, Coordinate, f64)> = points
            .windows(2)
            .map(|pair| (pair[0], pair[1], metric.length(&pair[0], &pair[1])))
            .collect();

        if let Some((from, to, weight)) = segments
            .iter()
            .find(|(_, _, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(Error::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight: *weight,
            });
        }

        let added = segments.len();
        for (from, to, weight) in segments {
            self.add_edge(from, to, weight)?;
        }
        Ok(added)
    }
}

/// Textual `FROM:TO:WEIGHT` edge description for label graphs.
///
/// The weight follows the last `:` and the endpoints are split at the first,
/// so the destination label may itself contain colons.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl FromStr for EdgeSpec {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let invalid = || Error::InvalidEdgeSpec {
            spec: spec.to_string(),
        };

        let (endpoints, weight) = spec.rsplit_once(':').ok_or_else(invalid)?;
        let (from, to) = endpoints.split_once(':').ok_or_else(invalid)?;
        let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
        if from.is_empty() || to.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

impl Graph<String> {
    /// Insert every edge in `specs`, stopping at the first invalid weight.
    pub fn extend_from_specs<'a, I>(&mut self, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a EdgeSpec>,
    {
        for spec in specs {
            self.add_edge(spec.from.clone(), spec.to.clone(), spec.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edge_specs() {
        let spec: EdgeSpec = "A:B:4".parse().expect("valid spec");
        assert_eq!(
            spec,
            EdgeSpec {
                from: "A".to_string(),
                to: "B".to_string(),
                weight: 4.0,
            }
        );

        let spec: EdgeSpec = "depot:gate:7:2.5".parse().expect("valid spec");
        assert_eq!(spec.from, "depot");
        assert_eq!(spec.to, "gate:7");
        assert_eq!(spec.weight, 2.5);
    }

    #[test]
    fn rejects_malformed_edge_specs() {
        for spec in ["", "A", "A:B", "A:B:x", ":B:1", "A::1"] {
            let err = spec.parse::<EdgeSpec>().expect_err("malformed");
            assert!(matches!(err, Error::InvalidEdgeSpec { .. }), "{spec}");
        }
    }

    #[test]
    fn negative_spec_weight_parses_but_insert_fails() {
        let spec: EdgeSpec = "A:B:-1".parse().expect("syntactically valid");
        let mut graph: Graph<String> = Graph::new();
        let err = graph.extend_from_specs([&spec]).expect_err("negative");
        assert!(matches!(err, Error::InvalidWeight { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 1.0).expect("valid weight");
        assert_eq!(graph.neighbours("A").count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }
}
