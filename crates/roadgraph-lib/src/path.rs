use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex, NodeKey};

/// Shortest distances from one source to every node it can reach.
///
/// Nodes missing from the vector are unreachable. Iteration follows the order
/// in which the traversal settled the nodes, so the source always comes first.
#[derive(Debug, Clone)]
pub struct DistanceVector<K> {
    entries: Vec<(K, f64)>,
    lookup: HashMap<K, f64>,
}

impl<K: NodeKey> DistanceVector<K> {
    fn from_settled(entries: Vec<(K, f64)>) -> Self {
        let lookup = entries.iter().cloned().collect();
        Self { entries, lookup }
    }

    /// Distance to `node`, or `None` when it is unreachable or unknown.
    pub fn get<Q>(&self, node: &Q) -> Option<f64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup.get(node).copied()
    }

    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup.contains_key(node)
    }

    /// `(node, distance)` pairs in settlement order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.entries.iter().map(|(node, distance)| (node, *distance))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_map(self) -> HashMap<K, f64> {
        self.lookup
    }
}

impl<K: PartialEq> PartialEq for DistanceVector<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Serialised as a list of `{"node": .., "distance": ..}` objects so that
/// non-string keys such as coordinates survive JSON encoding.
impl<K: Serialize> Serialize for DistanceVector<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a, K> {
            node: &'a K,
            distance: f64,
        }

        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (node, distance) in &self.entries {
            seq.serialize_element(&Entry {
                node,
                distance: *distance,
            })?;
        }
        seq.end()
    }
}

/// Outcome of a source to destination query.
///
/// An unreachable destination is a normal outcome: `path` is empty and
/// `distance` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<K> {
    pub path: Vec<K>,
    pub distance: Option<f64>,
}

impl<K> PathResult<K> {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Number of edges along the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Compute the shortest distance from `source` to every reachable node.
pub fn compute_distances<K, Q>(graph: &Graph<K>, source: &Q) -> Result<DistanceVector<K>>
where
    K: NodeKey + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    let start = graph
        .index_of(source)
        .ok_or_else(|| Error::UnknownSource {
            node: source.to_string(),
        })?;

    let traversal = Traversal::run(graph, start, None);
    let entries = traversal
        .order
        .iter()
        .map(|&index| (graph.key(index).clone(), traversal.distance[index]))
        .collect::<Vec<_>>();

    debug!(
        %source,
        settled = entries.len(),
        nodes = graph.node_count(),
        "computed shortest distances"
    );

    Ok(DistanceVector::from_settled(entries))
}

/// Compute the shortest path from `source` to `destination`.
///
/// The traversal stops as soon as the destination is settled.
pub fn compute_path<K, Q>(graph: &Graph<K>, source: &Q, destination: &Q) -> Result<PathResult<K>>
where
    K: NodeKey + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    let start = graph
        .index_of(source)
        .ok_or_else(|| Error::UnknownSource {
            node: source.to_string(),
        })?;
    let goal = graph
        .index_of(destination)
        .ok_or_else(|| Error::UnknownDestination {
            node: destination.to_string(),
        })?;

    let traversal = Traversal::run(graph, start, Some(goal));
    if !traversal.settled[goal] {
        debug!(
            %source,
            %destination,
            settled = traversal.order.len(),
            "destination unreachable"
        );
        return Ok(PathResult::unreachable());
    }

    let path = traversal
        .reconstruct(goal)
        .into_iter()
        .map(|index| graph.key(index).clone())
        .collect::<Vec<_>>();
    let distance = traversal.distance[goal];

    debug!(
        %source,
        %destination,
        hops = path.len().saturating_sub(1),
        distance,
        settled = traversal.order.len(),
        "computed shortest path"
    );

    Ok(PathResult {
        path,
        distance: Some(distance),
    })
}

/// Dijkstra state for one query, indexed by [`NodeIndex`].
struct Traversal {
    distance: Vec<f64>,
    parent: Vec<Option<NodeIndex>>,
    settled: Vec<bool>,
    order: Vec<NodeIndex>,
}

impl Traversal {
    fn run<K: NodeKey>(graph: &Graph<K>, start: NodeIndex, goal: Option<NodeIndex>) -> Self {
        let nodes = graph.node_count();
        let mut state = Self {
            distance: vec![f64::INFINITY; nodes],
            parent: vec![None; nodes],
            settled: vec![false; nodes],
            order: Vec::new(),
        };
        let mut queue = BinaryHeap::new();
        let mut sequence = 0u64;

        state.distance[start] = 0.0;
        queue.push(QueueEntry::new(start, 0.0, sequence));

        while let Some(entry) = queue.pop() {
            let current = entry.node;
            // Stale entry left behind by a later relaxation.
            if state.settled[current] {
                continue;
            }
            state.settled[current] = true;
            state.order.push(current);

            if goal == Some(current) {
                break;
            }

            let current_distance = state.distance[current];
            for edge in graph.edges(current) {
                let next = edge.target;
                if state.settled[next] {
                    continue;
                }

                let next_cost = current_distance + edge.weight;
                if next_cost < state.distance[next] {
                    state.distance[next] = next_cost;
                    state.parent[next] = Some(current);
                    sequence += 1;
                    queue.push(QueueEntry::new(next, next_cost, sequence));
                }
            }
        }

        state
    }

    fn reconstruct(&self, goal: NodeIndex) -> Vec<NodeIndex> {
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(node) = current {
            path.push(node);
            current = self.parent[node];
        }
        path.reverse();
        path
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop in push order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
