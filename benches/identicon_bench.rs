use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bishopicon::{compute_identicon, Board, DirectionSequence};

fn bench_walk(c: &mut Criterion) {
    let directions = DirectionSequence::from_slug("benchmark");
    c.bench_function("walk_7x7_3_iterations", |b| {
        b.iter(|| Board::walk(black_box(7), &directions, black_box(3)).unwrap())
    });
    c.bench_function("walk_64x64_256_iterations", |b| {
        b.iter(|| Board::walk(black_box(64), &directions, black_box(256)).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    c.bench_function("identicon_default_markup", |b| {
        b.iter(|| compute_identicon(black_box("benchmark"), 7, 3, 300).unwrap().as_markup())
    });
    c.bench_function("identicon_32x32_base64", |b| {
        b.iter(|| compute_identicon(black_box("benchmark"), 32, 16, 1024).unwrap().as_base64())
    });
}

criterion_group!(benches, bench_walk, bench_render);
criterion_main!(benches);
