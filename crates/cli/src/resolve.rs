//! Mapping of parsed keywords onto price-list entries.

use std::collections::BTreeMap;

use movebill_catalog::{Catalog, CatalogItem};
use movebill_core::{CatalogItemId, DomainResult};
use movebill_parser::QuantityTextParser;
use movebill_pricing::InventoryLine;

/// Built-in keywords and the default price-list entry each one stands for.
///
/// `kommode`/`dresser` have no entry in the default price list.
const DEFAULT_KEYWORD_ITEMS: &[(&str, &str)] = &[
    ("bed", "bett-140x200"),
    ("bett", "bett-140x200"),
    ("sofa", "sofa-3-sitzer"),
    ("couch", "sofa-3-sitzer"),
    ("tisch", "esstisch"),
    ("table", "esstisch"),
    ("stuhl", "stuhl"),
    ("chair", "stuhl"),
    ("schrank", "kleiderschrank-2-tuerig"),
    ("wardrobe", "kleiderschrank-2-tuerig"),
    ("box", "umzugskarton-standard"),
    ("karton", "umzugskarton-standard"),
];

/// Keyword to price-list id table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordItems {
    items: BTreeMap<String, CatalogItemId>,
}

impl KeywordItems {
    pub fn defaults() -> DomainResult<Self> {
        let items = DEFAULT_KEYWORD_ITEMS
            .iter()
            .map(|(keyword, id)| Ok((keyword.to_string(), CatalogItemId::new(*id)?)))
            .collect::<DomainResult<_>>()?;
        Ok(Self { items })
    }

    /// Replace or add entries; keywords are matched case-insensitively.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, CatalogItemId>) -> Self {
        for (keyword, id) in overrides {
            self.items.insert(keyword.trim().to_lowercase(), id.clone());
        }
        self
    }

    pub fn get(&self, keyword: &str) -> Option<&CatalogItemId> {
        self.items.get(keyword)
    }

    /// The mapped entry when `catalog` has it, otherwise the first entry whose
    /// name starts with the keyword as a whole word.
    pub fn resolve<'c>(&self, catalog: &'c Catalog, keyword: &str) -> Option<&'c CatalogItem> {
        if let Some(item) = self.get(keyword).and_then(|id| catalog.get(id)) {
            return Some(item);
        }
        catalog
            .items()
            .iter()
            .find(|item| leading_word(&item.name) == keyword)
    }
}

fn leading_word(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse `text` and turn every mention into an inventory line.
///
/// Mentions that resolve to no price-list entry are returned by original text.
pub fn resolve_description(
    parser: &QuantityTextParser,
    catalog: &Catalog,
    items: &KeywordItems,
    text: &str,
) -> (Vec<InventoryLine>, Vec<String>) {
    let mut lines = Vec::new();
    let mut unresolved = Vec::new();
    for found in parser.parse(text) {
        match items.resolve(catalog, &found.matched_name) {
            Some(item) => lines.push(InventoryLine::new(item.id.clone(), found.quantity)),
            None => {
                tracing::warn!(text = %found.original_text, "no price-list entry for parsed item");
                unresolved.push(found.original_text);
            }
        }
    }
    (lines, unresolved)
}
