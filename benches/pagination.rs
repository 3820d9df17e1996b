//! Pagination micro-benchmarks
//!
//! Measures packing throughput against the monospace oracle, with and
//! without the measurement cache.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pageflow::{ContentBlock, FlowEngine, FlowOptions, MonospaceOracle};
use std::hint::black_box;

const WORDS: [&str; 8] = [
    "harbour", "ledger", "quay", "lantern", "tide", "compass", "rope", "gull",
];

fn document(blocks: usize) -> Vec<ContentBlock> {
    (0..blocks)
        .map(|b| {
            let len = if b % 10 == 3 { 800 } else { 40 + (b * 13) % 120 };
            let text = (0..len)
                .map(|w| WORDS[(b + w * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ");
            ContentBlock::text(text)
        })
        .collect()
}

fn oracle() -> MonospaceOracle {
    MonospaceOracle::new().with_viewport(816.0, 1056.0)
}

fn benchmark_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate");
    let options = FlowOptions::default();

    for blocks in [10, 100, 500] {
        let content = document(blocks);

        group.bench_with_input(BenchmarkId::new("direct", blocks), &content, |b, content| {
            let engine = FlowEngine::new(oracle());
            b.iter(|| {
                engine
                    .paginate(black_box(content.clone()), &options)
                    .expect("pagination failed")
            });
        });

        group.bench_with_input(BenchmarkId::new("cached", blocks), &content, |b, content| {
            b.iter(|| {
                let engine = FlowEngine::cached(oracle());
                engine
                    .paginate(black_box(content.clone()), &options)
                    .expect("pagination failed")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_paginate);
criterion_main!(benches);
