//! Benchmarks for bit-level I/O and MD5.
//!
//! - Writer/reader throughput for several value widths
//! - MSB-first vs LSB-first wire order
//! - MD5 throughput across data sizes

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huffbit_core::bitstream::{BitOrder, BitReader, BitWriter};
use huffbit_core::md5::Md5;
use std::hint::black_box;
use std::io::Cursor;

/// Number of values written per iteration.
const VALUES: usize = 64 * 1024;

/// Pseudo-random values from a fixed-seed LCG.
fn random_values(count: usize) -> Vec<u32> {
    let mut values = Vec::with_capacity(count);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..count {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push((seed >> 32) as u32);
    }
    values
}

fn encode(values: &[u32], bits: u32, order: BitOrder) -> Vec<u8> {
    let mut output = Vec::with_capacity(values.len() * bits as usize / 8 + 1);
    let mut writer = BitWriter::new(&mut output, order);
    for &v in values {
        writer.write(v, bits).unwrap();
    }
    writer.flush(false).unwrap();
    drop(writer);
    output
}

/// Benchmark writing values of various widths
fn bench_write_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitwriter_widths");
    let values = random_values(VALUES);

    for bits in [1u32, 3, 8, 13, 32] {
        group.throughput(Throughput::Bytes((VALUES * bits as usize / 8) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| encode(black_box(&values), bits, BitOrder::Msb));
        });
    }

    group.finish();
}

/// Benchmark reading values of various widths
fn bench_read_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitreader_widths");
    let values = random_values(VALUES);

    for bits in [1u32, 3, 8, 13, 32] {
        let data = encode(&values, bits, BitOrder::Msb);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &data, |b, data| {
            b.iter(|| {
                let mut reader = BitReader::new(Cursor::new(black_box(data)), BitOrder::Msb);
                let mut acc = 0u32;
                for _ in 0..VALUES {
                    acc ^= reader.read(bits).unwrap();
                }
                acc
            });
        });
    }

    group.finish();
}

/// Compare wire orders
fn bench_bit_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_order");
    let values = random_values(VALUES);

    for (name, order) in [("msb", BitOrder::Msb), ("lsb", BitOrder::Lsb)] {
        group.bench_function(name, |b| {
            b.iter(|| encode(black_box(&values), 7, order));
        });
    }

    group.finish();
}

/// Benchmark MD5 across data sizes
fn bench_md5(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5");

    for (name, size) in [("64B", 64), ("4KB", 4 * 1024), ("1MB", 1024 * 1024)] {
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| Md5::digest(black_box(data)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_write_widths,
    bench_read_widths,
    bench_bit_order,
    bench_md5
);
criterion_main!(benches);
