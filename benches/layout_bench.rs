use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::assets::{natural_cmp, try_list, MediaFilter};
use folio::config::AppConfig;
use folio::gallery::{Catalog, Variant};
use folio::layout::{layout, GridTemplate, LayoutOptions};
use folio::render;
use folio::types::{Category, MediaFile};
use std::fs;
use std::hint::black_box;
use tempfile::TempDir;

fn everydays(n: usize) -> Vec<MediaFile> {
    (1..=n).map(|i| MediaFile::new(format!("E_{}.gif", i))).collect()
}

fn options() -> LayoutOptions {
    LayoutOptions {
        base_path: "/everydays".to_string(),
        fallback_asset: "/ComingSoon.gif".to_string(),
        accent_modulus: 5,
        ordinal_width: 3,
        label: "Day".to_string(),
    }
}

fn benchmark_periodic_layout(c: &mut Criterion) {
    let template = GridTemplate::periodic();
    let options = options();

    let mut group = c.benchmark_group("periodic_layout");
    for n in [0usize, 40, 78, 500] {
        let files = everydays(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &files, |b, files| {
            b.iter(|| black_box(layout(files, &template, &options)))
        });
    }
    group.finish();
}

fn benchmark_flow_layout(c: &mut Criterion) {
    let files = everydays(1000);
    let options = options();
    c.bench_function("flow_layout_1000", |b| {
        b.iter(|| {
            let template = GridTemplate::flow(6, files.len());
            black_box(layout(&files, &template, &options))
        })
    });
}

fn benchmark_natural_sort(c: &mut Criterion) {
    // reverse order, mixed case and padding
    let names: Vec<String> = (0..2000)
        .rev()
        .map(|i| if i % 3 == 0 { format!("E_{:04}.GIF", i) } else { format!("e_{}.gif", i) })
        .collect();

    c.bench_function("natural_sort_2000", |b| {
        b.iter(|| {
            let mut sorted = names.clone();
            sorted.sort_by(|a, b| natural_cmp(a, b));
            black_box(sorted)
        })
    });
}

fn benchmark_listing(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..500 {
        let ext = if i % 4 == 0 { "txt" } else { "gif" };
        fs::write(temp_dir.path().join(format!("E_{}.{}", i, ext)), b"").unwrap();
    }
    let filter = MediaFilter::new(["gif"]).with_excludes(["*_1?.gif"]).unwrap();

    c.bench_function("list_500_entries", |b| b.iter(|| black_box(try_list(temp_dir.path(), &filter).unwrap())));
}

fn benchmark_home_page(c: &mut Criterion) {
    let cfg = AppConfig::default();
    let catalog = Catalog::from_config(&cfg).unwrap();
    let files = everydays(60);

    c.bench_function("render_home_page", |b| {
        b.iter(|| {
            let grid = catalog.grid(Category::Everydays, &files, Variant::Desktop);
            let page = render::home_page(&cfg.site, &cfg.device.root_path, &grid, files.len(), Variant::Desktop);
            black_box(page.into_string())
        })
    });
}

criterion_group!(
    benches,
    benchmark_periodic_layout,
    benchmark_flow_layout,
    benchmark_natural_sort,
    benchmark_listing,
    benchmark_home_page
);
criterion_main!(benches);
