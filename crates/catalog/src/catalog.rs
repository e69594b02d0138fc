use serde::{Deserialize, Serialize};

use movebill_core::{CatalogItemId, DomainResult};

use crate::item::CatalogItem;

/// Read-only snapshot of the price list.
///
/// Lookups are by id and return the first entry with that id; the snapshot is
/// never mutated by pricing or parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &CatalogItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for item in &self.items {
            if !out.contains(&item.category.as_str()) {
                out.push(&item.category);
            }
        }
        out
    }

    /// Filter by case-insensitive name substring and (optionally) exact category.
    pub fn search<'a>(&'a self, term: &str, category: Option<&str>) -> Vec<&'a CatalogItem> {
        let term = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&term))
            .filter(|item| category.is_none_or(|c| item.category == c))
            .collect()
    }

    /// Validate every entry.
    pub fn validate(&self) -> DomainResult<()> {
        self.items.iter().try_for_each(CatalogItem::validate)
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Source of price-list snapshots (database, file, seed data).
pub trait CatalogProvider {
    fn snapshot(&self) -> DomainResult<Catalog>;
}

impl CatalogProvider for Catalog {
    fn snapshot(&self) -> DomainResult<Catalog> {
        Ok(self.clone())
    }
}
