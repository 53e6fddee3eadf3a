use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzjb_core::compression::CompressionCodec;
use lzjb_core::constants::flags;
use lzjb_core::container::{ContainerCodec, ContainerConfig};
use rand::Rng;
use std::hint::black_box;

fn bench_containers(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let sizes = vec![
        ("Tiny", 64),
        ("Small", 4 * 1024),
        ("Medium", 128 * 1024),
        ("Large", 1024 * 1024),
    ];

    for (size_name, size) in sizes {
        // Low-entropy input so the LZ codecs find matches.
        let input: Vec<u8> = (0..size).map(|_| rng.gen_range(0..4)).collect();

        let mut group_compress = c.benchmark_group(format!("Compress_{size_name}"));
        group_compress.throughput(Throughput::Bytes(size as u64));

        for id in CompressionCodec::ALL {
            let codec = ContainerCodec::with_codec(id, ContainerConfig::default());
            group_compress.bench_with_input(BenchmarkId::new(id.name(), size), &input, |b, i| {
                b.iter(|| codec.compress(black_box(i), flags::NONE).unwrap())
            });
        }
        group_compress.finish();

        let mut group_decompress = c.benchmark_group(format!("Decompress_{size_name}"));
        group_decompress.throughput(Throughput::Bytes(size as u64));

        for id in CompressionCodec::ALL {
            let codec = ContainerCodec::with_codec(id, ContainerConfig::default());
            let container = codec.compress(&input, flags::NONE).unwrap();
            group_decompress.bench_with_input(BenchmarkId::new(id.name(), size), &container, |b, e| {
                b.iter(|| codec.decompress(black_box(e), flags::NONE).unwrap())
            });
        }
        group_decompress.finish();
    }
}

criterion_group!(benches, bench_containers);
criterion_main!(benches);
