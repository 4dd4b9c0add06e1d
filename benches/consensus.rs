//! Benchmarks for panel evaluation: recruitment plus aggregation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use focus_group::{Panel, PanelConfig};

fn build_panel(panelists: usize, pool_size: usize) -> Panel<i32> {
    let config = PanelConfig {
        panelists,
        preferences_per_panelist: 3,
    };
    let mut panel = Panel::with_seed(config, 42).expect("valid config");
    for i in 0..pool_size {
        let weight = (i as f64).mul_add(0.5, -10.0);
        panel.add_preference(move |n: &i32| f64::from(*n) + weight);
    }
    panel
}

fn bench_opine(c: &mut Criterion) {
    let mut group = c.benchmark_group("opine");
    for panelists in [10, 100, 1000] {
        let mut panel = build_panel(panelists, 20);
        group.bench_with_input(
            BenchmarkId::from_parameter(panelists),
            &panelists,
            |b, _| b.iter(|| panel.opine(black_box(&7)).unwrap()),
        );
    }
    group.finish();
}

fn bench_verdict(c: &mut Criterion) {
    let mut panel = build_panel(100, 20);
    c.bench_function("verdict/100", |b| {
        b.iter(|| panel.verdict(black_box(&7)).unwrap());
    });
}

fn bench_deliberate(c: &mut Criterion) {
    let mut panel = build_panel(100, 20);
    c.bench_function("deliberate/100", |b| {
        b.iter(|| panel.deliberate(black_box(&7)).unwrap());
    });
}

criterion_group!(benches, bench_opine, bench_verdict, bench_deliberate);
criterion_main!(benches);
