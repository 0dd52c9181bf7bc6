//! Criterion benchmarks for fuel-route.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use fuel_route::engine::KruskalEngine;
use fuel_route::format::LineParser;
use fuel_route::graph::{DisjointSet, RouteGraph};
use fuel_route::types::EdgeRecord;

/// Random multigraph with small integer costs.
fn make_large_graph(stop_count: usize, edges_per_stop: usize) -> RouteGraph {
    let mut rng = rand::thread_rng();
    let mut edges = Vec::with_capacity(stop_count * edges_per_stop);
    for i in 0..stop_count {
        for _ in 0..edges_per_stop {
            let target = rng.gen_range(0..stop_count);
            let cost = rng.gen_range(0..100) as f64 / 4.0;
            if let Ok(edge) = EdgeRecord::new(format!("S{}", i), format!("S{}", target), cost) {
                edges.push(edge);
            }
        }
    }
    RouteGraph::from_edges(edges)
}

/// Hyphen-chain route file with `rows` data rows of five stops each.
fn make_route_file(rows: usize, stop_count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut lines = vec![
        "Mapa de rutas".to_string(),
        "Consumo por linea".to_string(),
        "Linea A-B X 1l".to_string(),
    ];
    for i in 0..rows {
        let chain: Vec<String> = (0..5)
            .map(|_| format!("S{}", rng.gen_range(0..stop_count)))
            .collect();
        lines.push(format!(
            "Bus{} {} {} {:.2}l",
            i,
            chain.join("-"),
            rng.gen_range(1..60),
            rng.gen_range(0.5..40.0)
        ));
    }
    lines
}

fn bench_kruskal(c: &mut Criterion) {
    let small = make_large_graph(1_000, 4);
    let large = make_large_graph(50_000, 4);
    let engine = KruskalEngine::new();

    c.bench_function("kruskal_1k_stops", |b| {
        b.iter(|| engine.compute(&small).unwrap())
    });
    c.bench_function("kruskal_50k_stops", |b| {
        b.iter(|| engine.compute(&large).unwrap())
    });
}

fn bench_disjoint_set(c: &mut Criterion) {
    let n = 100_000;
    c.bench_function("union_find_chain_100k", |b| {
        b.iter(|| {
            let mut sets = DisjointSet::with_singletons(n);
            for i in 1..n {
                sets.union(i - 1, i).unwrap();
            }
            sets.find(0).unwrap()
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let lines = make_route_file(20_000, 5_000);
    let parser = LineParser::default();

    c.bench_function("parse_20k_rows", |b| {
        b.iter(|| parser.parse(&lines).unwrap())
    });
    c.bench_function("parse_and_solve_20k_rows", |b| {
        b.iter(|| {
            let parsed = parser.parse(&lines).unwrap();
            KruskalEngine::new()
                .compute(&RouteGraph::from_edges(parsed.edges))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_kruskal, bench_disjoint_set, bench_parse);
criterion_main!(benches);
