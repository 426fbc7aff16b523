use std::time::{Duration, Instant};
use log::{info, warn};
use rand::Rng;
use rayon::prelude::*;
use ordered_float::OrderedFloat;
use bidir_dijkstra::algorithm::{PointToPointAlgorithm, ShortestPath};
use bidir_dijkstra::graph::generators::generate_random_graph;
use bidir_dijkstra::graph::{DirectedGraph, Graph};
use bidir_dijkstra::{BidirectionalDijkstra, Dijkstra, Error, SearchConfig};

type Weight = OrderedFloat<f64>;
type TestGraph = DirectedGraph<Weight>;

const QUERIES_PER_GRAPH: usize = 100;
const MAX_WEIGHT: f64 = 10.0;
const EPSILON: f64 = 1e-9;

// Times one algorithm over all query pairs, returning the total and the number of paths found
fn benchmark_algorithm<A>(algorithm: &A, graph: &TestGraph, pairs: &[(usize, usize)]) -> (Duration, usize)
where
    A: PointToPointAlgorithm<Weight, TestGraph>,
{
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let found = pairs
        .iter()
        .filter(|&&(source, target)| algorithm.find_path(graph, source, target).is_ok())
        .count();
    let duration = start.elapsed();

    println!("  - Found {} of {} paths in {:?}", found, pairs.len(), duration);
    (duration, found)
}

fn same_outcome(a: &Result<ShortestPath<Weight>, Error>, b: &Result<ShortestPath<Weight>, Error>) -> bool {
    match (a, b) {
        (Ok(a), Ok(b)) => (a.length.into_inner() - b.length.into_inner()).abs() <= EPSILON,
        (Err(a), Err(b)) => a == b,
        _ => false,
    }
}

// Checks every pair against the reference; each query owns its own search state so they run in parallel
fn verify(bidirectional: &BidirectionalDijkstra, graph: &TestGraph, pairs: &[(usize, usize)]) -> usize {
    let dijkstra = Dijkstra::new();
    pairs
        .par_iter()
        .filter(|&&(source, target)| {
            let expected = PointToPointAlgorithm::<Weight, TestGraph>::find_path(&dijkstra, graph, source, target);
            let actual = bidirectional.find_path(graph, source, target);
            let agree = same_outcome(&expected, &actual);
            if !agree {
                warn!("{} -> {}: Dijkstra {:?}, bidirectional {:?}", source, target, expected, actual);
            }
            !agree
        })
        .count()
}

fn load_config() -> SearchConfig {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => return SearchConfig::default(),
    };

    match std::fs::read_to_string(&path).map(|json| SearchConfig::from_json(&json)) {
        Ok(Ok(config)) => {
            info!("loaded search configuration from {}", path);
            config
        }
        Ok(Err(err)) => {
            warn!("ignoring malformed configuration {}: {}", path, err);
            SearchConfig::default()
        }
        Err(err) => {
            warn!("could not read configuration {}: {}", path, err);
            SearchConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    // (vertices, edges) - the first size matches the classic 1000/6000 setup
    let graph_sizes = vec![
        (1_000, 6_000),
        (10_000, 60_000),
        (100_000, 600_000),
    ];

    let config = load_config();
    println!("=====================================================");
    println!("Benchmark: Bidirectional Dijkstra vs Dijkstra");
    println!("Configuration: {:?}", config);
    println!("=====================================================");

    let bidirectional = BidirectionalDijkstra::with_config(config);
    let dijkstra = Dijkstra::new();
    let mut rng = rand::thread_rng();
    let mut results = Vec::new();

    for &(vertices, edges) in &graph_sizes {
        println!("\nGenerating random graph with {} vertices and {} edges...", vertices, edges);
        let graph = generate_random_graph(vertices, edges, MAX_WEIGHT, &mut rng);
        let pairs: Vec<(usize, usize)> = (0..QUERIES_PER_GRAPH)
            .map(|_| (rng.gen_range(0..vertices), rng.gen_range(0..vertices)))
            .collect();

        let (bidirectional_time, found) = benchmark_algorithm(&bidirectional, &graph, &pairs);
        let (dijkstra_time, _) = benchmark_algorithm(&dijkstra, &graph, &pairs);

        let mismatches = verify(&bidirectional, &graph, &pairs);
        if mismatches > 0 {
            warn!("{} of {} queries disagree with Dijkstra", mismatches, pairs.len());
        }

        let speedup = dijkstra_time.as_secs_f64() / bidirectional_time.as_secs_f64();
        println!("Speedup - Bidirectional vs Dijkstra: {:.2}x", speedup);

        results.push((vertices, found, bidirectional_time, dijkstra_time, mismatches));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<8} | {:<15} | {:<15} | {:<10} | {:<10}",
             "Vertices", "Paths", "Bidir (ms)", "Dijkstra (ms)", "SpeedUp", "Mismatches");
    println!("-----------------------------------------------------");

    for (vertices, found, bidirectional_time, dijkstra_time, mismatches) in &results {
        let speedup = dijkstra_time.as_secs_f64() / bidirectional_time.as_secs_f64();
        println!("{:<10} | {:<8} | {:<15} | {:<15} | {:<10.2} | {:<10}",
                 vertices,
                 found,
                 bidirectional_time.as_millis(),
                 dijkstra_time.as_millis(),
                 speedup,
                 mismatches);
    }

    if results.iter().any(|result| result.4 > 0) {
        std::process::exit(1);
    }
}
