//! Shared fixtures for integration tests.

use std::collections::HashMap;

use roadgraph_lib::Graph;

/// The four-node reference graph: A-B:4, A-C:1, C-B:2, B-D:1.
#[allow(dead_code)]
pub fn reference_graph() -> Graph<String> {
    label_graph(&[("A", "B", 4.0), ("A", "C", 1.0), ("C", "B", 2.0), ("B", "D", 1.0)])
}

#[allow(dead_code)]
pub fn label_graph(edges: &[(&str, &str, f64)]) -> Graph<String> {
    Graph::from_edges(
        edges
            .iter()
            .map(|&(from, to, weight)| (from.to_string(), to.to_string(), weight)),
    )
    .expect("fixture weights are valid")
}

/// Minimum weight over all simple paths from `source`, by exhaustive search.
#[allow(dead_code)]
pub fn brute_force_distances(
    node_count: usize,
    edges: &[(usize, usize, f64)],
    source: usize,
) -> HashMap<usize, f64> {
    let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];
    for &(from, to, weight) in edges {
        adjacency[from].push((to, weight));
        if from != to {
            adjacency[to].push((from, weight));
        }
    }

    let mut best = HashMap::new();
    let mut visited = vec![false; node_count];
    visited[source] = true;
    explore(&adjacency, source, 0.0, &mut visited, &mut best);
    best
}

fn explore(
    adjacency: &[Vec<(usize, f64)>],
    node: usize,
    cost: f64,
    visited: &mut [bool],
    best: &mut HashMap<usize, f64>,
) {
    let entry = best.entry(node).or_insert(f64::INFINITY);
    if cost < *entry {
        *entry = cost;
    }

    for &(next, weight) in &adjacency[node] {
        if visited[next] {
            continue;
        }
        visited[next] = true;
        explore(adjacency, next, cost + weight, visited, best);
        visited[next] = false;
    }
}
