use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use plotxy_core::range::scan;
use plotxy_core::{pixel_of, Bounds, Point, RectI32, Transform};

fn gen_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            // simple waveform with drift
            Point::new(x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect()
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_range");
    for &n in &[10_000usize, 100_000usize] {
        let pts = gen_points(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pts, |b, pts| {
            b.iter(|| black_box(scan(pts)));
        });
    }
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_px");
    let area = RectI32::from_ltrb(60, 12, 788, 460);
    for &n in &[10_000usize, 100_000usize] {
        let pts = gen_points(n);
        let bounds = scan(&pts);
        group.bench_with_input(BenchmarkId::new("transform", n), &pts, |b, pts| {
            let t = Transform::new(area, bounds);
            b.iter(|| {
                let mut acc = 0.0;
                for &p in pts {
                    let (x, y) = t.to_px(p);
                    acc += x + y;
                }
                black_box(acc)
            });
        });
        group.bench_with_input(BenchmarkId::new("pixel_of", n), &pts, |b, pts| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in pts {
                    let (x, y) = pixel_of(area, bounds, p);
                    acc += x + y;
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan, bench_transform);
criterion_main!(benches);
