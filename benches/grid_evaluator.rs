use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_refine::{
    ColourMapKind, Options, Viewport, colour_map_factory, evaluate_grid, generate_raster,
};

const LIMIT: u32 = 512;

fn default_options(width: u32, height: u32) -> Options {
    Options::from_viewport(Viewport::default().with_size(width, height), LIMIT)
}

fn bench_serial_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_grid");
    group.sample_size(10);

    for (width, height) in [(600, 386), (1200, 772), (2400, 1544)] {
        let options = default_options(width, height);
        let label = format!("{}x{}", width, height);

        group.bench_with_input(BenchmarkId::new("serial", &label), &options, |b, &options| {
            b.iter(|| evaluate_grid(black_box(options), false))
        });
        group.bench_with_input(BenchmarkId::new("parallel", &label), &options, |b, &options| {
            b.iter(|| evaluate_grid(black_box(options), true))
        });
    }

    group.finish();
}

fn bench_generate_raster(c: &mut Criterion) {
    let grid = match evaluate_grid(default_options(600, 386), true) {
        Ok(grid) => grid,
        Err(err) => panic!("benchmark grid failed: {}", err),
    };
    let colour_map = colour_map_factory(ColourMapKind::Default);

    c.bench_function("generate_raster/600x386", |b| {
        b.iter(|| generate_raster(black_box(&grid), &colour_map))
    });
}

criterion_group!(benches, bench_serial_vs_parallel, bench_generate_raster);
criterion_main!(benches);
