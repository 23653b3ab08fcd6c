use criterion::{Criterion, criterion_group, criterion_main};
use linegraph_rs::api::{GraphEngine, GraphEngineConfig, LineSeries, SeriesStyle};
use linegraph_rs::core::{
    DataPoint, ValueRange, Viewport, project_fill_polygon, project_series_anchors,
};
use linegraph_rs::render::NullRenderer;
use std::hint::black_box;

fn sample_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            let y = 100.0 + (x * 0.05).sin() * 40.0;
            DataPoint::new(x, y)
        })
        .collect()
}

fn bench_anchor_projection_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920.0, 1080.0).with_extra_margin(18.0);
    let x_range = ValueRange::new(0.0, 10_000.0).expect("valid x range");
    let y_range = ValueRange::new(0.0, 200.0).expect("valid y range");
    let points = sample_points(10_000);

    c.bench_function("anchor_projection_10k", |b| {
        b.iter(|| {
            let _ = project_series_anchors(
                black_box(&points),
                black_box(x_range),
                black_box(y_range),
                black_box(viewport),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_fill_polygon_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920.0, 1080.0).with_border(8.0);
    let x_range = ValueRange::new(0.0, 10_000.0).expect("valid x range");
    let y_range = ValueRange::new(0.0, 200.0).expect("valid y range");
    let points = sample_points(10_000);

    c.bench_function("fill_polygon_10k", |b| {
        b.iter(|| {
            let _ = project_fill_polygon(
                black_box(&points),
                black_box(x_range),
                black_box(y_range),
                black_box(viewport),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_engine_frame_build_2k(c: &mut Criterion) {
    let config = GraphEngineConfig::new(Viewport::new(1600.0, 900.0))
        .with_x_range(0.0, 2_000.0)
        .with_y_range(0.0, 200.0);
    let mut engine = GraphEngine::new(NullRenderer::default(), config).expect("engine init");

    let style = SeriesStyle::default()
        .with_markers(true)
        .with_background(true);
    engine
        .insert_series("bench", LineSeries::new(sample_points(2_000)).with_style(style))
        .expect("series insert");

    c.bench_function("engine_frame_build_2k", |b| {
        b.iter(|| {
            let _ = engine.build_frame().expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_anchor_projection_10k,
    bench_fill_polygon_10k,
    bench_engine_frame_build_2k
);
criterion_main!(benches);
