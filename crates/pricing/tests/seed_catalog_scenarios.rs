//! End-to-end scenarios against the default price list.

use movebill_catalog::{Catalog, CatalogItem, UnitOfMeasure, default_price_list};
use movebill_core::{CatalogItemId, DomainError};
use movebill_parser::QuantityTextParser;
use movebill_pricing::{CostEstimator, InventoryLine, MoveParameters};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn line_for(catalog: &Catalog, name: &str, quantity: u32) -> InventoryLine {
    let item = catalog
        .items()
        .iter()
        .find(|i| i.name == name)
        .unwrap_or_else(|| panic!("seed item {name} missing"));
    InventoryLine::new(item.id.clone(), quantity)
}

#[test]
fn parsed_description_to_estimate() {
    let catalog = default_price_list().unwrap();
    let parser = QuantityTextParser::german_english().unwrap();

    let lines: Vec<InventoryLine> = parser
        .parse("2 Kartons und ein Sofa")
        .into_iter()
        .map(|m| {
            let item = catalog.search(&m.matched_name, None)[0];
            InventoryLine::new(item.id.clone(), m.quantity)
        })
        .collect();
    assert_eq!(lines.len(), 2);

    let params = MoveParameters {
        distance_km: 25.0,
        floors: 2,
        has_elevator: false,
        crew_size: 2,
        minimum_hours: 3.0,
    };
    let b = CostEstimator::new(&catalog).estimate(&lines, &params).unwrap();

    // Umzugskarton Standard (0.1 m³, 3.00) x2 + Sofa (2.5 m³, 150.00).
    assert!(approx(b.total_volume, 2.7));
    assert!(approx(b.material_cost, 156.0));
    assert!(approx(b.labor_hours, 2.7 * 0.5 / 2.0 * 1.2));
    assert!(approx(b.driving_hours, 0.5));
    // 0.81h + 0.5h is below the 3h minimum.
    assert!(approx(b.total_hours, 3.0));
    assert!(approx(b.labor_cost, 3.0 * 2.0 * 35.0 * 1.09));
    assert!(approx(b.transport_cost, 162.5));
    assert!(approx(b.total, b.labor_cost + 162.5 + 156.0));
}

#[test]
fn volumeless_piece_items_cost_exactly_their_price() {
    let id = |s: &str| CatalogItemId::new(s).unwrap();
    let catalog = Catalog::new(vec![
        CatalogItem::new(id("tape"), "Klebeband", "Verpackung", 2.5, UnitOfMeasure::PerPiece),
        CatalogItem::new(id("lock"), "Schloss", "Verpackung", 7.0, UnitOfMeasure::PerPiece),
    ]);
    let lines = vec![InventoryLine::new(id("tape"), 4), InventoryLine::new(id("lock"), 1)];
    let params = MoveParameters {
        distance_km: 0.0,
        floors: 0,
        has_elevator: true,
        crew_size: 3,
        minimum_hours: 2.0,
    };

    let b = CostEstimator::new(&catalog).estimate(&lines, &params).unwrap();
    assert_eq!(b.material_cost, 2.5 * 4.0 + 7.0);
    assert_eq!(b.transport_cost, b.total_hours * 50.0);
    assert_eq!(b.total_hours, 2.0);
}

#[test]
fn service_entries_do_not_add_material_cost() {
    let catalog = default_price_list().unwrap();
    let lines = vec![
        line_for(&catalog, "Arbeitsstunde", 8),
        line_for(&catalog, "LKW-Miete", 8),
        line_for(&catalog, "Kilometer-Pauschale", 40),
        line_for(&catalog, "Stuhl", 4),
    ];
    let params = MoveParameters {
        distance_km: 0.0,
        floors: 0,
        has_elevator: true,
        crew_size: 1,
        minimum_hours: 0.0,
    };

    let b = CostEstimator::new(&catalog).estimate(&lines, &params).unwrap();
    assert!(approx(b.material_cost, 100.0));
    assert!(approx(b.total_volume, 1.2));
}

#[test]
fn zero_crew_is_rejected_for_any_inventory() {
    let catalog = default_price_list().unwrap();
    let params = MoveParameters {
        distance_km: 10.0,
        floors: 1,
        has_elevator: false,
        crew_size: 0,
        minimum_hours: 0.0,
    };

    let err = CostEstimator::new(&catalog).estimate(&[], &params).unwrap_err();
    assert!(matches!(err, DomainError::InvalidParameter(_)));
}
