use bidir_dijkstra::graph::generators::{generate_grid, generate_random_graph};
use bidir_dijkstra::graph::{path_weight, DirectedGraph, Graph, MutableGraph};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn triangle() -> DirectedGraph<f64> {
    DirectedGraph::from_edges(vec![(1, 2, 1.0), (2, 3, 2.0), (3, 1, 3.0)])
}

#[test]
fn test_add_edge_creates_endpoints() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::new();
    assert!(graph.add_edge(7, 9, 2.5));

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_vertex(7));
    assert!(graph.has_vertex(9));
    assert!(graph.has_edge(7, 9));
    assert!(!graph.has_edge(9, 7));
    assert_eq!(graph.get_edge_weight(7, 9), Some(2.5));
}

#[test]
fn test_add_edge_overwrites_weight() {
    let mut graph = triangle();
    assert!(graph.add_edge(1, 2, 4.0));
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.get_edge_weight(1, 2), Some(4.0));
    assert_eq!(graph.incoming_edges(2).collect::<Vec<_>>(), vec![(1, 4.0)]);
}

#[test]
fn test_negative_nan_and_infinite_weights_are_rejected() {
    let mut graph = triangle();
    assert!(!graph.add_edge(1, 5, -1.0));
    assert!(!graph.add_edge(1, 5, f64::NAN));
    assert!(!graph.add_edge(1, 5, f64::INFINITY));
    assert!(!graph.update_edge_weight(1, 2, f64::INFINITY));
    assert!(!graph.has_vertex(5));
    assert!(!graph.update_edge_weight(1, 2, -0.5));
    assert_eq!(graph.get_edge_weight(1, 2), Some(1.0));
    assert!(graph.validate_non_negative());
}

#[test]
fn test_incoming_mirrors_outgoing() {
    let graph = DirectedGraph::from_edges(vec![(0, 1, 1.0), (0, 2, 2.0), (1, 2, 3.0), (2, 2, 0.5)]);

    for tail in graph.vertices() {
        for (head, weight) in graph.outgoing_edges(tail) {
            assert!(graph.incoming_edges(head).any(|edge| edge == (tail, weight)));
        }
    }
    let mut into_two: Vec<_> = graph.incoming_edges(2).collect();
    into_two.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(into_two, vec![(0, 2.0), (1, 3.0), (2, 0.5)]);
}

#[test]
fn test_remove_vertex_drops_its_edges() {
    let mut graph = triangle();
    assert!(graph.remove_vertex(3));
    assert!(!graph.remove_vertex(3));

    assert!(!graph.has_vertex(3));
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 3));
    assert!(!graph.has_edge(3, 1));
    assert_eq!(graph.get_edge_weight(1, 2), Some(1.0));
    assert_eq!(graph.get_edge_weight(2, 3), None);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.incoming_edges(1).count(), 0);
    assert_eq!(graph.outgoing_edges(2).count(), 0);
}

#[test]
fn test_remove_vertex_with_self_loop() {
    let mut graph = DirectedGraph::from_edges(vec![(0, 0, 1.0), (0, 1, 1.0), (1, 0, 1.0)]);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.remove_vertex(0));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_remove_edge() {
    let mut graph = triangle();
    assert!(graph.remove_edge(2, 3));
    assert!(!graph.remove_edge(2, 3));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.incoming_edges(3).count(), 0);
    // Endpoints stay behind
    assert!(graph.has_vertex(2));
    assert!(graph.has_vertex(3));
}

#[test]
fn test_add_vertex_skips_used_ids() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::new();
    assert!(graph.insert_vertex(10));
    assert!(!graph.insert_vertex(10));
    assert_eq!(graph.add_vertex(), 11);
    assert_eq!(graph.add_vertex(), 12);
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_path_weight() {
    let graph = triangle();
    assert_eq!(path_weight(&graph, &[1, 2, 3]), Some(3.0));
    assert_eq!(path_weight(&graph, &[1, 3]), None);
    assert_eq!(path_weight(&graph, &[2]), Some(0.0));
    assert_eq!(path_weight::<f64, _>(&graph, &[]), Some(0.0));
}

#[test]
fn test_generators() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate_random_graph(50, 200, 10.0, &mut rng);
    assert_eq!(graph.vertex_count(), 50);
    assert!(graph.edge_count() <= 200);
    assert!(graph
        .vertices()
        .flat_map(|v| graph.outgoing_edges(v).collect::<Vec<_>>())
        .all(|(_, weight)| weight.into_inner() >= 0.0 && weight.into_inner() < 10.0));

    let grid = generate_grid(4, 3);
    assert_eq!(grid.vertex_count(), 12);
    // 3 horizontal pairs per row, 4 vertical pairs per gap, both directions
    assert_eq!(grid.edge_count(), 2 * (3 * 3 + 4 * 2));
    assert!(grid.has_edge(5, 6));
    assert!(grid.has_edge(6, 5));
    assert!(!grid.has_edge(3, 4));
}
