//! Codec and MBR benchmarks

use std::hint::black_box;

use creof_spatial::{geojson, wkt, MbrIndex, MultiPolygon, Polygon, SpatialObject};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_square(rng: &mut StdRng) -> Polygon {
    let min_x: f64 = rng.gen_range(-180.0..170.0);
    let min_y: f64 = rng.gen_range(-90.0..80.0);
    let size: f64 = rng.gen_range(0.01..10.0);
    Polygon::new(vec![vec![
        [min_x, min_y],
        [min_x + size, min_y],
        [min_x + size, min_y + size],
        [min_x, min_y + size],
        [min_x, min_y],
    ]])
    .unwrap()
}

fn random_multi_polygon(rng: &mut StdRng, count: usize) -> MultiPolygon {
    MultiPolygon::new((0..count).map(|_| random_square(rng))).unwrap()
}

fn bench_wkt(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec/WKT");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [1, 10, 100].iter() {
        let multi = random_multi_polygon(&mut rng, *size);
        let text = multi.to_wkt();

        group.bench_with_input(BenchmarkId::new("emit", size), &multi, |b, multi| {
            b.iter(|| black_box(multi.to_wkt()))
        });
        group.bench_with_input(BenchmarkId::new("parse", size), &text, |b, text| {
            b.iter(|| black_box(wkt::parse(text).unwrap()))
        });
    }

    group.finish();
}

fn bench_geojson(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec/GeoJSON");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [1, 10, 100].iter() {
        let multi = random_multi_polygon(&mut rng, *size);
        let json = multi.to_json().unwrap();

        group.bench_with_input(BenchmarkId::new("emit", size), &multi, |b, multi| {
            b.iter(|| black_box(multi.to_json().unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("parse", size), &json, |b, json| {
            b.iter(|| black_box(geojson::parse(json).unwrap()))
        });
    }

    group.finish();
}

fn bench_mbr_equals(c: &mut Criterion) {
    let mut group = c.benchmark_group("MBR/Equals");
    let mut rng = StdRng::seed_from_u64(1234);

    for size in [100, 1_000, 10_000].iter() {
        let polygons: Vec<Polygon> = (0..*size).map(|_| random_square(&mut rng)).collect();
        let target = polygons[size / 2].bounding_box().unwrap();

        group.bench_with_input(BenchmarkId::new("scan", size), &polygons, |b, polygons| {
            b.iter(|| {
                let hits = polygons
                    .iter()
                    .filter(|polygon| polygon.bounding_box().unwrap() == target)
                    .count();
                black_box(hits)
            })
        });

        let index = MbrIndex::new();
        for (key, polygon) in polygons.iter().enumerate() {
            index.insert(key, polygon).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("rtree", size), &target, |b, target| {
            b.iter(|| black_box(index.find_rectangle_equals(target)))
        });
    }

    group.finish();
}

fn bench_bounding_box(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(99);
    let multi = random_multi_polygon(&mut rng, 1_000);

    c.bench_function("MBR/BoundingBox 1000 polygons", |b| {
        b.iter(|| black_box(multi.bounding_box().unwrap()))
    });
}

criterion_group!(
    benches,
    bench_wkt,
    bench_geojson,
    bench_mbr_equals,
    bench_bounding_box
);
criterion_main!(benches);
