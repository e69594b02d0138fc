use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use movebill_catalog::{Catalog, CatalogItem, UnitOfMeasure};
use movebill_core::CatalogItemId;
use movebill_parser::QuantityTextParser;
use movebill_pricing::{CostEstimator, InventoryLine, MoveParameters};

fn catalog(size: usize) -> Catalog {
    (0..size)
        .map(|i| {
            CatalogItem::new(
                CatalogItemId::new(format!("item-{i}")).unwrap(),
                format!("Item {i}"),
                "Bench",
                10.0 + i as f64,
                UnitOfMeasure::PerPiece,
            )
            .with_volume(0.5)
        })
        .collect()
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    let params = MoveParameters {
        distance_km: 42.0,
        floors: 3,
        has_elevator: false,
        crew_size: 3,
        minimum_hours: 4.0,
    };

    for size in [10usize, 100, 1_000] {
        let catalog = catalog(size);
        let lines: Vec<InventoryLine> = catalog
            .items()
            .iter()
            .map(|item| InventoryLine::new(item.id.clone(), 2))
            .collect();
        let estimator = CostEstimator::new(&catalog);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| estimator.estimate(black_box(lines), black_box(&params)))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let parser = QuantityTextParser::german_english().unwrap();
    let sentence = "2 Betten, ein Sofa, 3x Tisch, vier Stühle und 20 Kartons. ";

    let mut group = c.benchmark_group("parse");
    for repeat in [1usize, 10, 100] {
        let text = sentence.repeat(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| parser.parse(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimate, bench_parse);
criterion_main!(benches);
