use criterion::{Criterion, black_box, criterion_group, criterion_main};

use koch_studio::controllers::ports::renderer::RendererPort;
use koch_studio::core::actions::build_curve::build_curve::build_curve;
use koch_studio::core::actions::compute_viewport::compute_viewport::compute_viewport;
use koch_studio::core::actions::extract_half::extract_half::extract_half;
use koch_studio::core::data::colour::Colour;
use koch_studio::core::data::half_type::HalfType;
use koch_studio::render::polyline_renderer::RasterRenderer;

fn bench_build_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_curve");
    for depth in [4_u32, 6, 8] {
        group.bench_function(format!("depth_{}", depth), |b| {
            b.iter(|| build_curve(black_box(depth), black_box(2.0)));
        });
    }
    group.finish();
}

fn bench_extract_half(c: &mut Criterion) {
    let complete = build_curve(7, 2.0);

    c.bench_function("extract_left_depth_7", |b| {
        b.iter(|| extract_half(black_box(&complete), HalfType::Left));
    });
}

fn bench_render(c: &mut Criterion) {
    let scale = 2.0;
    let complete = build_curve(5, scale);
    let viewport = compute_viewport(&complete, HalfType::Complete, scale);
    let renderer = RasterRenderer::new(512, 512).unwrap();
    let colour = Colour { r: 0, g: 0, b: 255 };

    c.bench_function("render_complete_depth_5_512px", |b| {
        b.iter(|| {
            renderer
                .render(black_box(&complete), &viewport, colour, true)
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_build_curve, bench_extract_half, bench_render);
criterion_main!(benches);
