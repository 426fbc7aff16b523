use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::Rng;

/// Generates a random directed graph on vertices `0..n`
///
/// Draws `m` edges with uniformly random endpoints and weights in
/// `[0, max_weight)`. Repeated endpoint pairs overwrite the earlier weight and
/// self-loops are kept, so the result may hold fewer than `m` distinct edges.
/// Every id in `0..n` is a vertex even if no edge touches it.
pub fn generate_random_graph<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    max_weight: f64,
    rng: &mut R,
) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0.0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    for _ in 0..m {
        let tail = rng.gen_range(0..n);
        let head = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(0.0..max_weight));
        graph.add_edge(tail, head, weight);
    }

    graph
}

/// Generates a `width` x `height` grid with unit edges in both directions
/// between 4-neighbours
///
/// Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), OrderedFloat(1.0));
                graph.add_edge(index(x + 1, y), current, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), OrderedFloat(1.0));
                graph.add_edge(index(x, y + 1), current, OrderedFloat(1.0));
            }
        }
    }

    graph
}
