use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tu56_core::{encode_label, write_image, Block, LabelTable, PLACES};

fn bench_encode(c: &mut Criterion) {
    let long = "x".repeat(512);
    c.bench_function("encode_places", |bch| bch.iter(|| {
        for p in PLACES { black_box(encode_label(p).unwrap()); }
    }));
    c.bench_function("block_long_label", |bch| bch.iter(|| black_box(Block::from_label(&long).unwrap())));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.tu56");
    let labels = LabelTable::default();
    c.bench_function("write_image", |bch| bch.iter(|| black_box(write_image(&path, &labels).unwrap())));
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
