use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tween_core::easing;

fn bench_curves(c: &mut Criterion) {
    let curves: [(&str, fn(f64) -> f64); 5] = [
        ("linear", easing::linear),
        ("swing", easing::swing),
        ("quint_in_out", easing::quint_in_out),
        ("elastic_in", easing::elastic_in),
        ("bounce_in_out", easing::bounce_in_out),
    ];

    let mut group = c.benchmark_group("easing");
    for (name, curve) in curves {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..=100 {
                    acc += curve(black_box(f64::from(i) / 100.0));
                }
                acc
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_curves);
criterion_main!(benches);
