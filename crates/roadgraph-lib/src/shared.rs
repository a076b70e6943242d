//! Reader/writer coordination for graphs shared between concurrent callers.
//!
//! Queries hold the read lock for their whole run, so a query never observes a
//! half-applied mutation. Edge insertion and wholesale replacement take the
//! write lock and wait for in-flight queries to finish.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::error::Result;
use crate::graph::{Graph, NodeKey};
use crate::path::{compute_distances, compute_path, DistanceVector, PathResult};

/// Cloneable handle to a graph kept warm across requests.
#[derive(Debug)]
pub struct SharedGraph<K> {
    inner: Arc<RwLock<Graph<K>>>,
}

impl<K> Clone for SharedGraph<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: NodeKey> Default for SharedGraph<K> {
    fn default() -> Self {
        Self::new(Graph::new())
    }
}

impl<K: NodeKey> SharedGraph<K> {
    pub fn new(graph: Graph<K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Insert an edge under the write lock.
    pub fn add_edge(&self, from: K, to: K, weight: f64) -> Result<()> {
        self.inner.write().add_edge(from, to, weight)
    }

    /// Swap in a freshly built graph, returning the previous one.
    ///
    /// This is the refresh hook for callers whose edge source changed; queries
    /// already running finish against the old topology.
    pub fn replace(&self, graph: Graph<K>) -> Graph<K> {
        let mut guard = self.inner.write();
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "replacing shared graph"
        );
        std::mem::replace(&mut *guard, graph)
    }

    /// Clone of the current topology, independent of later mutation.
    pub fn snapshot(&self) -> Graph<K> {
        self.inner.read().clone()
    }

    /// Run `f` with shared read access to the graph.
    pub fn read<R>(&self, f: impl FnOnce(&Graph<K>) -> R) -> R {
        let graph = self.inner.read();
        f(&*graph)
    }

    pub fn compute_distances<Q>(&self, source: &Q) -> Result<DistanceVector<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let graph = self.inner.read();
        compute_distances(&*graph, source)
    }

    pub fn compute_path<Q>(&self, source: &Q, destination: &Q) -> Result<PathResult<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let graph = self.inner.read();
        compute_path(&*graph, source, destination)
    }
}

impl<K: NodeKey> From<Graph<K>> for SharedGraph<K> {
    fn from(graph: Graph<K>) -> Self {
        Self::new(graph)
    }
}
