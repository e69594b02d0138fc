//! Default price list for a fresh installation.

use movebill_core::{CatalogItemId, DomainResult};

use crate::catalog::{Catalog, CatalogProvider};
use crate::item::{CatalogItem, UnitOfMeasure};

struct Seed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    price: f64,
    unit: UnitOfMeasure,
    volume: Option<f64>,
    // (assembly, disassembly)
    assembly: Option<(f64, f64)>,
}

const fn furniture(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    price: f64,
    volume: f64,
    assembly: f64,
    disassembly: f64,
) -> Seed {
    Seed {
        id,
        name,
        category,
        price,
        unit: UnitOfMeasure::PerPiece,
        volume: Some(volume),
        assembly: Some((assembly, disassembly)),
    }
}

const fn packing(id: &'static str, name: &'static str, price: f64, volume: f64) -> Seed {
    Seed {
        id,
        name,
        category: "Verpackung",
        price,
        unit: UnitOfMeasure::PerPiece,
        volume: Some(volume),
        assembly: None,
    }
}

const fn service(id: &'static str, name: &'static str, price: f64, unit: UnitOfMeasure) -> Seed {
    Seed {
        id,
        name,
        category: "Dienstleistungen",
        price,
        unit,
        volume: None,
        assembly: None,
    }
}

const SEEDS: &[Seed] = &[
    furniture("sofa-3-sitzer", "Sofa (3-Sitzer)", "Wohnzimmer", 150.0, 2.5, 50.0, 40.0),
    furniture("sessel", "Sessel", "Wohnzimmer", 80.0, 1.2, 30.0, 25.0),
    furniture("couchtisch", "Couchtisch", "Wohnzimmer", 60.0, 0.8, 20.0, 15.0),
    furniture("tv-schrank", "TV-Schrank", "Wohnzimmer", 100.0, 1.5, 40.0, 35.0),
    furniture("regal", "Regal", "Wohnzimmer", 70.0, 1.0, 35.0, 30.0),
    furniture("bett-140x200", "Bett (140x200)", "Schlafzimmer", 120.0, 2.0, 60.0, 50.0),
    furniture("bett-180x200", "Bett (180x200)", "Schlafzimmer", 150.0, 2.5, 80.0, 70.0),
    furniture("kleiderschrank-2-tuerig", "Kleiderschrank (2-türig)", "Schlafzimmer", 140.0, 2.2, 70.0, 60.0),
    furniture("kleiderschrank-3-tuerig", "Kleiderschrank (3-türig)", "Schlafzimmer", 180.0, 3.0, 90.0, 80.0),
    furniture("nachttisch", "Nachttisch", "Schlafzimmer", 40.0, 0.5, 15.0, 10.0),
    furniture("esstisch", "Esstisch", "Küche/Esszimmer", 90.0, 1.3, 40.0, 30.0),
    furniture("stuhl", "Stuhl", "Küche/Esszimmer", 25.0, 0.3, 10.0, 5.0),
    furniture("kuechenschrank", "Küchenschrank", "Küche/Esszimmer", 100.0, 1.5, 50.0, 40.0),
    packing("umzugskarton-standard", "Umzugskarton Standard", 3.0, 0.1),
    packing("umzugskarton-gross", "Umzugskarton Groß", 4.0, 0.15),
    packing("kleiderbox", "Kleiderbox", 8.0, 0.2),
    packing("luftpolsterfolie", "Luftpolsterfolie (Rolle)", 12.0, 0.05),
    packing("packpapier", "Packpapier (10kg)", 15.0, 0.08),
    service("arbeitsstunde", "Arbeitsstunde", 35.0, UnitOfMeasure::PerHour),
    service("lkw-miete", "LKW-Miete", 50.0, UnitOfMeasure::PerHour),
    service("kilometer-pauschale", "Kilometer-Pauschale", 0.5, UnitOfMeasure::PerKilometer),
];

/// Build the default price list.
///
/// Ids are stable slugs (`sofa-3-sitzer`, `umzugskarton-standard`, ...) so
/// requests can reference entries across runs.
pub fn default_price_list() -> DomainResult<Catalog> {
    SEEDS
        .iter()
        .map(|seed| {
            let mut item = CatalogItem::new(
                CatalogItemId::new(seed.id)?,
                seed.name,
                seed.category,
                seed.price,
                seed.unit,
            );
            item.volume = seed.volume;
            if let Some((assembly, disassembly)) = seed.assembly {
                item = item.with_assembly(assembly, disassembly);
            }
            Ok(item)
        })
        .collect()
}

/// Provider serving the default price list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl CatalogProvider for SeedCatalog {
    fn snapshot(&self) -> DomainResult<Catalog> {
        default_price_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_price_list_is_valid() {
        let catalog = default_price_list().unwrap();
        assert_eq!(catalog.len(), SEEDS.len());
        catalog.validate().unwrap();
    }

    #[test]
    fn seed_ids_are_stable_and_unique() {
        let catalog = SeedCatalog.snapshot().unwrap();
        let sofa = catalog.get(&CatalogItemId::new("sofa-3-sitzer").unwrap()).unwrap();
        assert_eq!(sofa.name, "Sofa (3-Sitzer)");

        for (i, item) in catalog.items().iter().enumerate() {
            assert_eq!(catalog.get(&item.id).map(|found| &found.name), Some(&item.name), "{i}");
        }
    }

    #[test]
    fn services_have_no_volume() {
        let catalog = default_price_list().unwrap();
        let services = catalog.search("", Some("Dienstleistungen"));
        assert_eq!(services.len(), 3);
        assert!(services.iter().all(|s| s.volume.is_none()));
        assert!(services.iter().all(|s| s.unit != UnitOfMeasure::PerPiece));
    }

    #[test]
    fn packing_material_has_no_assembly_surcharge() {
        let catalog = default_price_list().unwrap();
        for item in catalog.search("", Some("Verpackung")) {
            assert!(item.assembly_price.is_none());
            assert!(item.disassembly_price.is_none());
        }
    }
}
