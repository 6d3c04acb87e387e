//! Benchmarks across the five radixes and the slice / `io` entry points,
//! one group per operation, parameterized per byte size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use safe_encoding::{facade, io::EncodeWriter, Radix16, Radix32, Radix64, Radix80, Radix85, RadixDescriptor};
use std::io::{Read, Write};

const BYTE_SIZES: [usize; 6] = [3, 32, 128, 512, 4096, 8192];

fn random_bytes(size: usize) -> Vec<u8> {
    let mut buf = vec![0u8; size];
    rand::thread_rng().fill(buf.as_mut_slice());
    buf
}

fn encode_bench<R: RadixDescriptor>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("encode/{}", name));
    for &size in &BYTE_SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let input = random_bytes(size);
            let mut dst = vec![0u8; facade::get_encoded_length::<R>(size as i64, false).unwrap() as usize];
            b.iter(|| {
                let n = facade::encode::<R>(&input, &mut dst).unwrap();
                black_box(&dst[..n]);
            })
        });
    }
    group.finish();
}

fn decode_bench<R: RadixDescriptor>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("decode/{}", name));
    for &size in &BYTE_SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let input = random_bytes(size);
            let mut encoded =
                vec![0u8; facade::get_encoded_length::<R>(size as i64, false).unwrap() as usize];
            let n = facade::encode::<R>(&input, &mut encoded).unwrap();
            encoded.truncate(n);
            let mut dst = vec![0u8; size];
            b.iter(|| {
                let n = facade::decode::<R>(&encoded, &mut dst).unwrap();
                black_box(&dst[..n]);
            })
        });
    }
    group.finish();
}

fn encode_writer_bench<R: RadixDescriptor>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("encode_writer/{}", name));
    for &size in &BYTE_SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let input = random_bytes(size);
            let mut output = Vec::with_capacity(size * 2);
            b.iter(|| {
                output.clear();
                let mut writer = EncodeWriter::<R, _>::new(&mut output);
                writer.write_all(&input).unwrap();
                writer.finish().unwrap();
                black_box(&output);
            })
        });
    }
    group.finish();
}

fn decode_reader_bench<R: RadixDescriptor>(name: &str, c: &mut Criterion) {
    use safe_encoding::io::DecodeReader;

    let mut group = c.benchmark_group(format!("decode_reader/{}", name));
    for &size in &BYTE_SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let input = random_bytes(size);
            let mut encoded =
                vec![0u8; facade::get_encoded_length::<R>(size as i64, false).unwrap() as usize];
            let n = facade::encode::<R>(&input, &mut encoded).unwrap();
            encoded.truncate(n);
            let mut decoded = Vec::with_capacity(size);
            b.iter(|| {
                decoded.clear();
                let mut reader = DecodeReader::<R, _>::new(std::io::Cursor::new(&encoded));
                reader.read_to_end(&mut decoded).unwrap();
                black_box(&decoded);
            })
        });
    }
    group.finish();
}

fn bench(c: &mut Criterion) {
    encode_bench::<Radix16>("radix16", c);
    encode_bench::<Radix32>("radix32", c);
    encode_bench::<Radix64>("radix64", c);
    encode_bench::<Radix80>("radix80", c);
    encode_bench::<Radix85>("radix85", c);

    decode_bench::<Radix16>("radix16", c);
    decode_bench::<Radix32>("radix32", c);
    decode_bench::<Radix64>("radix64", c);
    decode_bench::<Radix80>("radix80", c);
    decode_bench::<Radix85>("radix85", c);

    encode_writer_bench::<Radix64>("radix64", c);
    decode_reader_bench::<Radix64>("radix64", c);
}

criterion_group!(benches, bench);
criterion_main!(benches);
