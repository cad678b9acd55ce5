//! Key Derivation Benchmark
//!
//! Measures SHA-512 cache key derivation across ticket namespaces and
//! identifier lengths.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package gatepass-tickets
//!
//! # Run specific benchmark
//! cargo bench --package gatepass-tickets -- derive_key
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gatepass_tickets::keys::{derive_key, PROXY_TICKET_NAMESPACE, SERVICE_TICKET_NAMESPACE};
use std::time::Duration;

// ============================================================================
// Namespace Derivation
// ============================================================================

fn benchmark_derive_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_key");

    // Typical proxy-granting-ticket IOU identifier
    let iou = "PGTIOU-84-aBcDeFgHiJkLmNoPqRsT-cas01.example.org";
    group.throughput(Throughput::Bytes(iou.len() as u64));
    group.bench_function("proxy/typical", |b| {
        b.iter(|| {
            let key = derive_key(PROXY_TICKET_NAMESPACE, black_box(iou)).unwrap();
            black_box(key)
        })
    });

    // Typical service ticket identifier
    let ticket = "ST-1856339-aA5Yuvrxzpv8Tau1cYQ7-cas01.example.org";
    group.throughput(Throughput::Bytes(ticket.len() as u64));
    group.bench_function("service/typical", |b| {
        b.iter(|| {
            let key = derive_key(SERVICE_TICKET_NAMESPACE, black_box(ticket)).unwrap();
            black_box(key)
        })
    });

    group.finish();
}

// ============================================================================
// Identifier Length Scaling
// ============================================================================

fn benchmark_identifier_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_key/identifier_length");

    for len in [16usize, 64, 256, 1024] {
        let identifier = "x".repeat(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("sha512", len), &identifier, |b, id| {
            b.iter(|| {
                let key = derive_key(PROXY_TICKET_NAMESPACE, black_box(id)).unwrap();
                black_box(key)
            })
        });
    }

    group.finish();
}

criterion_group!(
    name = derivation_benches;
    config = Criterion::default()
        .sample_size(500)
        .measurement_time(Duration::from_secs(10));
    targets = benchmark_derive_key
);

criterion_group!(
    name = length_benches;
    config = Criterion::default()
        .sample_size(200);
    targets = benchmark_identifier_lengths
);

criterion_main!(derivation_benches, length_benches);
