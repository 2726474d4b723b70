//! Benchmarks for NFP computation and packing.
//!
//! Measures raw no-fit polygon construction, the effect of the NFP cache,
//! and full packing runs at various part counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quicknest_d2::{nfp, pack, Polygon, Sheet, State};

fn bench_nfp(c: &mut Criterion) {
    let mut group = c.benchmark_group("nfp");

    let fixed = Polygon::rectangle(100.0, 60.0);
    let moving = Polygon::rectangle(40.0, 30.0);
    group.bench_function("convex_pair", |b| {
        b.iter(|| nfp::nfp(black_box(&fixed), black_box(&moving)))
    });

    let fixed = Polygon::l_shape(100.0, 100.0, 50.0, 50.0);
    let moving = Polygon::l_shape(40.0, 40.0, 20.0, 20.0);
    group.bench_function("nonconvex_pair", |b| {
        b.iter(|| nfp::nfp(black_box(&fixed), black_box(&moving)))
    });

    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    group.sample_size(10);

    for &n in &[5, 10, 20] {
        let parts: Vec<Polygon> = (0..n)
            .map(|i| {
                let w = 20.0 + (i as f64 * 3.0) % 30.0;
                let h = 15.0 + (i as f64 * 7.0) % 25.0;
                Polygon::rectangle(w, h)
            })
            .collect();
        let sheets = vec![Sheet::new(200.0, 200.0)];

        group.bench_with_input(BenchmarkId::new("rectangles", n), &parts, |b, parts| {
            b.iter(|| {
                let mut state = State::new();
                let result = pack(black_box(&sheets), black_box(parts), &mut state, true, 4);
                black_box(result)
            })
        });
    }

    // Same workload, but the state (and with it every NFP) is carried over
    // between runs.
    let parts: Vec<Polygon> = (0..10)
        .map(|i| {
            let w = 20.0 + (i as f64 * 3.0) % 30.0;
            let h = 15.0 + (i as f64 * 7.0) % 25.0;
            Polygon::rectangle(w, h)
        })
        .collect();
    let sheets = vec![Sheet::new(200.0, 200.0)];
    let mut state = State::new();
    group.bench_function("rectangles_warm_state", |b| {
        b.iter(|| {
            let result = pack(black_box(&sheets), black_box(&parts), &mut state, true, 4);
            black_box(result)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_nfp, bench_pack);
criterion_main!(benches);
