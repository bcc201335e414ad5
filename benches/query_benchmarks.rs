//! Benchmarks for the filter/search and aggregate hot paths

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use opsdeck_core::types::Customer;
use opsdeck_data::aggregate;
use opsdeck_data::datasets::{customers, operations, overview};
use opsdeck_data::query::{self, CustomerFilter};

/// Repeat the seeded accounts into a list large enough to measure
fn scaled_customers(copies: usize) -> Vec<Customer> {
    let seed = customers::customers();
    let mut scaled = Vec::with_capacity(seed.len() * copies);
    for copy in 0..copies {
        for customer in &seed {
            let mut customer = customer.clone();
            customer.id = format!("{}-{copy}", customer.id);
            scaled.push(customer);
        }
    }
    scaled
}

fn bench_customer_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("customer_filtering");

    let queries = ["", "tech", "global", "no-such-account"];
    let accounts = scaled_customers(250);

    group.throughput(Throughput::Elements(accounts.len() as u64));
    for search in queries {
        group.bench_with_input(BenchmarkId::new("search", search), &search, |b, search| {
            let filter = CustomerFilter {
                search: Some(search),
                status: None,
            };
            b.iter(|| query::filter_customers(&accounts, &filter));
        });
    }

    group.finish();
}

fn bench_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");

    let lines = operations::production_lines();
    group.bench_function("average_running_efficiency", |b| {
        b.iter(|| aggregate::average_running_efficiency(&lines));
    });

    let months = overview::revenue_by_month();
    group.bench_function("fiscal_totals", |b| {
        b.iter(|| {
            (
                aggregate::total_revenue(&months),
                aggregate::total_expenses(&months),
                aggregate::total_profit(&months),
            )
        });
    });

    group.finish();
}

fn bench_store_seeding(c: &mut Criterion) {
    c.bench_function("store_seed", |b| {
        b.iter(opsdeck_data::DataStore::seed);
    });
}

criterion_group!(
    benches,
    bench_customer_filtering,
    bench_aggregates,
    bench_store_seeding
);
criterion_main!(benches);
