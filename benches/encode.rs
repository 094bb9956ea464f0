use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrsymbol::render::{RenderOptions, to_image};
use qrsymbol::{encode, encode_batch};

fn bench_encode_versions(c: &mut Criterion) {
    for (label, len) in [("v2", 20), ("v3", 32), ("v4", 46), ("v5", 106)] {
        let text = "q".repeat(len);
        c.bench_function(&format!("encode_{label}_{len}b"), |b| {
            b.iter(|| encode(black_box(&text)))
        });
    }
}

fn bench_encode_batch(c: &mut Criterion) {
    let owned: Vec<String> = (0..256).map(|i| format!("device-{i:04}:pin-{}", i * 37)).collect();
    let texts: Vec<&str> = owned.iter().map(String::as_str).collect();
    c.bench_function("encode_batch_256", |b| {
        b.iter(|| encode_batch(black_box(&texts)))
    });
}

fn bench_render(c: &mut Criterion) {
    let symbol = encode("render benchmark payload").unwrap().unwrap();
    let options = RenderOptions::default();
    c.bench_function("render_v3_8px", |b| {
        b.iter(|| to_image(black_box(&symbol), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_encode_versions,
    bench_encode_batch,
    bench_render
);
criterion_main!(benches);
