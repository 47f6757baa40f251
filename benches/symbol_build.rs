use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_grid::{ECLevel, MaskPattern, ModuleGrid, SymbolBuilder, Version, mask_candidates};

fn payload(version: Version) -> Vec<u8> {
    let mut grid = ModuleGrid::new(version, ECLevel::M);
    grid.init(MaskPattern::Pattern0, false);
    (0..grid.free_modules() / 8).map(|i| i as u8).collect()
}

fn bench_init(c: &mut Criterion) {
    let version = Version::new(10).unwrap();
    c.bench_function("init_v10", |b| {
        b.iter(|| {
            let mut grid = ModuleGrid::new(black_box(version), ECLevel::M);
            grid.init(MaskPattern::Pattern0, false);
            grid
        })
    });
}

fn bench_build_small(c: &mut Criterion) {
    let version = Version::new(1).unwrap();
    let data = payload(version);
    let builder = SymbolBuilder::new(version, ECLevel::M).quiet_zone(4);
    c.bench_function("build_v1", |b| b.iter(|| builder.build(black_box(&data))));
}

fn bench_build_large(c: &mut Criterion) {
    let version = Version::new(40).unwrap();
    let data = payload(version);
    let builder = SymbolBuilder::new(version, ECLevel::M).quiet_zone(4);
    c.bench_function("build_v40", |b| b.iter(|| builder.build(black_box(&data))));
}

fn bench_mask_candidates(c: &mut Criterion) {
    let version = Version::new(25).unwrap();
    let data = payload(version);
    c.bench_function("mask_candidates_v25", |b| {
        b.iter(|| mask_candidates(version, ECLevel::M, black_box(&data)))
    });
}

criterion_group!(
    benches,
    bench_init,
    bench_build_small,
    bench_build_large,
    bench_mask_candidates
);
criterion_main!(benches);
