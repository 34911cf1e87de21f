#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chaintable::ChainTable;
use criterion::{criterion_group, criterion_main, Criterion};
use proptest::{prelude::{any, Strategy}, strategy::ValueTree, test_runner::TestRunner};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn chain_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>()
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Chained table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chain_table = ChainTable::new();
    let mut rust_map = HashMap::new();
    group.bench_function("chaintable insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chain_table.insert(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chaintable get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chain_table.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, chain_table_benches);

criterion_main!(benches);
