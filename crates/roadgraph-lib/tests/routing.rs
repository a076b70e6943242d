mod common;

use std::collections::HashMap;

use roadgraph_lib::{
    compute_distances, compute_path, Coordinate, Error, Graph, PathResult, SegmentMetric,
};

use common::{label_graph, reference_graph};

#[test]
fn reference_distances_from_a() {
    let graph = reference_graph();
    let distances = compute_distances(&graph, "A").expect("known source");

    let expected: HashMap<String, f64> = [("A", 0.0), ("B", 3.0), ("C", 1.0), ("D", 4.0)]
        .into_iter()
        .map(|(node, distance)| (node.to_string(), distance))
        .collect();
    assert_eq!(distances.into_map(), expected);
}

#[test]
fn reference_path_from_a_to_d() {
    let graph = reference_graph();
    let result = compute_path(&graph, "A", "D").expect("known endpoints");

    assert_eq!(result.path, vec!["A", "C", "B", "D"]);
    assert_eq!(result.distance, Some(4.0));
    assert_eq!(result.hop_count(), 3);
    assert!(result.is_reachable());
}

#[test]
fn source_is_settled_first_at_zero() {
    let graph = reference_graph();
    let distances = compute_distances(&graph, "C").expect("known source");

    let first = distances.iter().next().expect("source present");
    assert_eq!(first, (&"C".to_string(), 0.0));
    assert_eq!(distances.len(), 4);
}

#[test]
fn path_to_self_is_single_node() {
    let graph = reference_graph();
    let result = compute_path(&graph, "B", "B").expect("known endpoints");
    assert_eq!(result.path, vec!["B"]);
    assert_eq!(result.distance, Some(0.0));
    assert_eq!(result.hop_count(), 0);
}

#[test]
fn unknown_source_is_an_error() {
    let graph = reference_graph();

    let err = compute_distances(&graph, "Z").expect_err("Z is not in the graph");
    assert_eq!(
        err,
        Error::UnknownSource {
            node: "Z".to_string()
        }
    );

    let err = compute_path(&graph, "Z", "A").expect_err("Z is not in the graph");
    assert!(matches!(err, Error::UnknownSource { .. }));
}

#[test]
fn unknown_destination_is_an_error() {
    let graph = reference_graph();
    let err = compute_path(&graph, "A", "Z").expect_err("Z is not in the graph");
    assert_eq!(
        err,
        Error::UnknownDestination {
            node: "Z".to_string()
        }
    );
}

#[test]
fn disconnected_destination_is_unreachable_not_an_error() {
    let graph = label_graph(&[("A", "B", 1.0), ("X", "Y", 1.0)]);

    let result = compute_path(&graph, "A", "Y").expect("known endpoints");
    assert_eq!(result, PathResult::unreachable());
    assert!(!result.is_reachable());
    assert!(result.path.is_empty());

    let distances = compute_distances(&graph, "A").expect("known source");
    assert!(!distances.contains("Y"));
    assert_eq!(distances.get("X"), None);
    assert_eq!(distances.len(), 2);
}

#[test]
fn isolated_self_loop_node_is_unreachable() {
    let graph = label_graph(&[("A", "B", 1.0), ("Q", "Q", 3.0)]);

    let result = compute_path(&graph, "A", "Q").expect("known endpoints");
    assert!(!result.is_reachable());

    let own = compute_distances(&graph, "Q").expect("known source");
    assert_eq!(own.len(), 1);
    assert_eq!(own.get("Q"), Some(0.0));
}

#[test]
fn path_distance_matches_distance_vector() {
    let graph = reference_graph();
    let distances = compute_distances(&graph, "D").expect("known source");

    for node in ["A", "B", "C", "D"] {
        let result = compute_path(&graph, "D", node).expect("known endpoints");
        assert_eq!(result.distance, distances.get(node), "D -> {node}");
    }
}

#[test]
fn repeated_queries_are_identical() {
    let graph = label_graph(&[
        ("A", "B", 1.0),
        ("A", "C", 1.0),
        ("B", "D", 1.0),
        ("C", "D", 1.0),
    ]);

    let first = compute_path(&graph, "A", "D").expect("known endpoints");
    for _ in 0..10 {
        assert_eq!(compute_path(&graph, "A", "D").expect("known endpoints"), first);
    }
    // Equal-cost alternatives resolve to the branch discovered first.
    assert_eq!(first.path, vec!["A", "B", "D"]);

    let distances = compute_distances(&graph, "A").expect("known source");
    assert_eq!(compute_distances(&graph, "A").expect("known source"), distances);
}

#[test]
fn results_outlive_graph_mutation() {
    let mut graph = reference_graph();
    let before = compute_path(&graph, "A", "D").expect("known endpoints");

    graph
        .add_edge("A".to_string(), "D".to_string(), 0.5)
        .expect("valid weight");
    let after = compute_path(&graph, "A", "D").expect("known endpoints");

    assert_eq!(before.distance, Some(4.0));
    assert_eq!(after.path, vec!["A", "D"]);
    assert_eq!(after.distance, Some(0.5));
}

#[test]
fn early_termination_matches_full_traversal() {
    let graph = label_graph(&[
        ("S", "A", 2.0),
        ("S", "B", 7.0),
        ("A", "B", 3.0),
        ("A", "C", 8.0),
        ("B", "C", 1.0),
        ("C", "T", 2.0),
        ("B", "T", 9.0),
    ]);

    let result = compute_path(&graph, "S", "T").expect("known endpoints");
    let distances = compute_distances(&graph, "S").expect("known source");

    assert_eq!(result.path, vec!["S", "A", "B", "C", "T"]);
    assert_eq!(result.distance, distances.get("T"));
    assert_eq!(result.distance, Some(8.0));
}

#[test]
fn coordinate_graph_routes_along_roads() {
    let a = Coordinate::new(26.28, 73.00);
    let b = Coordinate::new(26.28, 73.01);
    let c = Coordinate::new(26.29, 73.01);
    let d = Coordinate::new(26.29, 73.00);

    let mut graph: Graph<Coordinate> = Graph::new();
    graph
        .add_polyline(&[a, b, c], SegmentMetric::Haversine)
        .expect("road one");
    graph
        .add_polyline(&[a, d], SegmentMetric::Haversine)
        .expect("road two");
    graph
        .add_polyline(&[d, c], SegmentMetric::Haversine)
        .expect("road three");

    let result = compute_path(&graph, &a, &c).expect("known endpoints");
    let distance = result.distance.expect("reachable");

    assert_eq!(result.path.first(), Some(&a));
    assert_eq!(result.path.last(), Some(&c));
    assert_eq!(result.hop_count(), 2);
    let direct = a.haversine_distance(&c);
    assert!(distance >= direct, "{distance} < {direct}");
}

#[test]
fn owned_string_queries_work() {
    let graph = reference_graph();
    let source = String::from("A");
    let destination = String::from("B");
    let result = compute_path(&graph, &source, &destination).expect("known endpoints");
    assert_eq!(result.distance, Some(3.0));
}
