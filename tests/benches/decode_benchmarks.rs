//! # Envelope Decode Benchmarks
//!
//! Decode and indexing are on the keystroke path of the inspector UI, so
//! both must stay comfortably under a millisecond for realistic envelopes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use envelope_decoder::{decode_header, header_indexes, DecoderService, EnvelopeDecodeApi, Environment};
use envelope_tests::{make_envelope, make_transfer_payload};

fn bench_header_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("header-decode");

    for num_signers in [0usize, 1, 13, 19] {
        let buf = make_envelope(num_signers, 2, [0xEE; 32], &make_transfer_payload());
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode_header", num_signers),
            &buf,
            |b, buf| b.iter(|| black_box(decode_header(buf).unwrap())),
        );
        group.bench_with_input(
            BenchmarkId::new("header_indexes", num_signers),
            &buf,
            |b, buf| b.iter(|| black_box(header_indexes(buf).unwrap())),
        );
    }
    group.finish();
}

fn bench_full_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("full-decode");
    let service = DecoderService::new();
    let buf = make_envelope(19, 2, [0xEE; 32], &make_transfer_payload());

    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("decode_with_registry_dispatch", |b| {
        b.iter(|| black_box(service.decode(&buf, Environment::Mainnet).unwrap()))
    });
    group.bench_function("indexes_only", |b| {
        b.iter(|| black_box(service.indexes_only(&buf).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_header_decode, bench_full_decode);
criterion_main!(benches);
