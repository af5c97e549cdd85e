use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffcode::{analyze, build_tree, HuffmanCodec};

const SIZES: &[usize] = &[8192, 65536, 1_048_576];

fn get_test_data(size: usize) -> Vec<u8> {
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    let full = pattern.repeat((size / pattern.len()) + 1);
    full[..size].to_vec()
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for &size in SIZES {
        let data = get_test_data(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("build_tree", size), &data, |b, data| {
            b.iter(|| build_tree(&analyze(data.iter().copied())).unwrap());
        });

        let codec = HuffmanCodec::from_symbols(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| codec.encode(data).unwrap());
        });

        let encoded = codec.encode(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| codec.decode(encoded).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_huffman);
criterion_main!(benches);
