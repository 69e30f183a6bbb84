//! Throughput benchmarks for the skip driver.
//!
//! Compares the fast paths for homogeneous fixed-width containers against the general
//! per-element path, which is the one place the driver cannot avoid pushing a child frame
//! for every value it steps over.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use thrift_skip::{skip, StackBuf, WireType};

fn list_of_i64(n: u32) -> Vec<u8> {
    let mut buf = vec![WireType::I64 as u8];
    buf.extend_from_slice(&n.to_be_bytes());
    buf.extend(std::iter::repeat(0u8).take(n as usize * 8));
    buf
}

fn map_of_i32_i64(n: u32) -> Vec<u8> {
    let mut buf = vec![WireType::I32 as u8, WireType::I64 as u8];
    buf.extend_from_slice(&n.to_be_bytes());
    buf.extend(std::iter::repeat(0u8).take(n as usize * (4 + 8)));
    buf
}

fn list_of_strings(n: u32, len: u32) -> Vec<u8> {
    let mut buf = vec![WireType::String as u8];
    buf.extend_from_slice(&n.to_be_bytes());
    for _ in 0..n {
        buf.extend_from_slice(&len.to_be_bytes());
        buf.extend(std::iter::repeat(b'x').take(len as usize));
    }
    buf
}

fn bench_fast_path_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip/fast_path_list_i64");
    let mut stack = StackBuf::with_capacity(64);

    for &n in &[100u32, 1_000, 10_000, 100_000] {
        let input = list_of_i64(n);
        group.bench_with_input(BenchmarkId::new("elements", n), &input, |b, input| {
            b.iter(|| black_box(skip(&mut stack, input, WireType::List as u8)));
        });
    }

    group.finish();
}

fn bench_fast_path_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip/fast_path_map_i32_i64");
    let mut stack = StackBuf::with_capacity(64);

    for &n in &[100u32, 1_000, 10_000, 100_000] {
        let input = map_of_i32_i64(n);
        group.bench_with_input(BenchmarkId::new("entries", n), &input, |b, input| {
            b.iter(|| black_box(skip(&mut stack, input, WireType::Map as u8)));
        });
    }

    group.finish();
}

fn bench_general_path_list_of_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip/general_path_list_string");
    let mut stack = StackBuf::with_capacity(64);

    for &n in &[100u32, 1_000, 10_000] {
        let input = list_of_strings(n, 8);
        group.bench_with_input(BenchmarkId::new("elements", n), &input, |b, input| {
            b.iter(|| black_box(skip(&mut stack, input, WireType::List as u8)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fast_path_list,
    bench_fast_path_map,
    bench_general_path_list_of_strings,
);
criterion_main!(benches);
