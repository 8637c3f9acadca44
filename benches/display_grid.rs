use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gridshow_rs::display_pipeline::{
    ColorMap, FigureImage, FigurePresenter, GridConfig, GridRenderer, ImageData, RasterSurface,
    Result,
};

/// Presenter that discards the composed figure, so the benchmarks measure
/// conversion and composition rather than terminal I/O.
struct DiscardPresenter;

impl FigurePresenter for DiscardPresenter {
    fn present(&mut self, _figure: &FigureImage) -> Result<()> {
        Ok(())
    }
}

fn generate_gray_images(count: usize, size: usize) -> Vec<ImageData> {
    (0..count)
        .map(|i| {
            let data: Vec<u8> = (0..size * size)
                .map(|p| ((p + i * 37) % 256) as u8)
                .collect();
            ImageData::gray8(size, size, data).unwrap()
        })
        .collect()
}

fn benchmark_render_by_image_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_image_count");

    for count in [4, 9, 16] {
        let images = generate_gray_images(count, 100);

        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &images,
            |b, images| {
                let config = GridConfig::builder().cols(4).figsize(8.0, 8.0).build();

                b.iter(|| {
                    let surface = RasterSurface::with_presenter(DiscardPresenter);
                    let mut renderer = GridRenderer::with_surface(surface, config.clone());
                    renderer.render(black_box(images), None).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn benchmark_render_by_colormap(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_colormap");
    let images = generate_gray_images(6, 200);

    let colormaps = [
        (ColorMap::Gray, "gray"),
        (ColorMap::Viridis, "viridis"),
        (ColorMap::Jet, "jet"),
    ];

    for (cmap, label) in colormaps {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &images,
            |b, images| {
                let config = GridConfig::builder()
                    .cols(3)
                    .figsize(8.0, 6.0)
                    .cmap(cmap)
                    .build();

                b.iter(|| {
                    let surface = RasterSurface::with_presenter(DiscardPresenter);
                    let mut renderer = GridRenderer::with_surface(surface, config.clone());
                    renderer.render(black_box(images), None).unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_by_image_count,
    benchmark_render_by_colormap
);
criterion_main!(benches);
