use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use dag_order::algs::{bfs_order, dfs_order};
use dag_order::{BufferPool, KeyedNode, SortOptions, Strategy, sort_indexed, sort_keyed};

/// Layered random DAG with about `fanout` successors per vertex, shuffled so
/// the input is not already in order.
fn layered_dag(n: usize, fanout: usize, seed: u64) -> Vec<Vec<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut slot: Vec<usize> = (0..n).collect();
    slot.shuffle(&mut rng);
    let mut succ = vec![Vec::new(); n];
    for rank in 0..n.saturating_sub(1) {
        for _ in 0..fanout {
            let later = rng.gen_range(rank + 1..n);
            succ[slot[rank]].push(slot[later]);
        }
    }
    succ
}

fn bench_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_sort");
    let pool = BufferPool::new();

    for &n in &[1_000usize, 100_000] {
        let graph = layered_dag(n, 4, 42);

        group.bench_with_input(BenchmarkId::new("bfs_order", n), &n, |b, _| {
            let opts = SortOptions::default();
            b.iter(|| black_box(bfs_order(&graph, &opts)));
        });

        group.bench_with_input(BenchmarkId::new("dfs_order", n), &n, |b, _| {
            let opts = SortOptions::default();
            b.iter(|| black_box(dfs_order(&graph, &opts)));
        });

        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let name = format!("{strategy:?}_in_place_pooled").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, _| {
                let opts = SortOptions::new()
                    .with_buffers(&pool)
                    .with_strategy(strategy);
                b.iter_batched(
                    || graph.clone(),
                    |mut vs| {
                        let _ = black_box(sort_indexed(&mut vs, &opts));
                        vs
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_sort");

    for &n in &[1_000usize, 20_000] {
        // Tie every vertex to the one nothing points at, so the graph has a
        // single root and stays acyclic.
        let mut succ = layered_dag(n, 3, 7);
        let mut targeted = vec![false; n];
        succ.iter().flatten().for_each(|&w| targeted[w] = true);
        let first = targeted.iter().position(|&t| !t).unwrap_or(0);
        for v in 0..n {
            if v != first {
                succ[first].push(v);
            }
        }
        let graph: HashMap<u32, KeyedNode<u32>> = succ
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let key = i as u32;
                let next: Vec<u32> = s.iter().map(|&w| w as u32).collect();
                (key, KeyedNode::with_successors(key, next))
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("sort_keyed", n), &n, |b, _| {
            b.iter(|| black_box(sort_keyed(&graph)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_indexed, bench_keyed);
criterion_main!(benches);
