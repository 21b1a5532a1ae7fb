use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use payload_codec::codec::{EncryptionCodec, PayloadCodec};
use payload_codec::payload::Payload;

fn codec(compress: bool) -> EncryptionCodec {
    EncryptionCodec::builder("bench")
        .key("bench", &[0x42u8; 32])
        .compress(compress)
        .build()
        .expect("valid bench key")
}

fn batch(size: usize) -> Vec<Payload> {
    let body = br#"{"order":42,"items":["widget","gadget"],"note":"repeat "}"#.repeat(size / 56 + 1);
    vec![Payload::new(body).with_metadata("encoding", "json/plain"); 4]
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("encryption_codec");
    for size in [256usize, 16 * 1024, 256 * 1024] {
        let input = batch(size);
        let bytes: usize = input.iter().map(|p| p.data.len()).sum();
        group.throughput(Throughput::Bytes(bytes as u64));

        for compress in [false, true] {
            let codec = codec(compress);
            let label = if compress { "zlib" } else { "plain" };

            group.bench_with_input(BenchmarkId::new(format!("encode/{label}"), size), &input, |b, input| {
                b.iter(|| codec.encode(black_box(input)).expect("encode"))
            });

            let encoded = codec.encode(&input).expect("encode");
            group.bench_with_input(BenchmarkId::new(format!("decode/{label}"), size), &encoded, |b, encoded| {
                b.iter(|| codec.decode(black_box(encoded)).expect("decode"))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
