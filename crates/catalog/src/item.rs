use serde::{Deserialize, Serialize};

use movebill_core::{CatalogItemId, DomainError, DomainResult, Entity};

/// How a price-list entry is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    /// Billed per piece (furniture, boxes, packing material).
    #[serde(rename = "item")]
    PerPiece,
    #[serde(rename = "hour")]
    PerHour,
    #[serde(rename = "m3")]
    PerCubicMeter,
    #[serde(rename = "km")]
    PerKilometer,
}

impl UnitOfMeasure {
    /// Label printed in the unit column of an invoice.
    pub fn invoice_label(self) -> &'static str {
        match self {
            UnitOfMeasure::PerPiece => "Stück",
            UnitOfMeasure::PerHour => "Std",
            UnitOfMeasure::PerCubicMeter => "m³",
            UnitOfMeasure::PerKilometer => "km",
        }
    }
}

/// Size tag of a size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeTag {
    M,
    L,
    XL,
    XXL,
}

impl SizeTag {
    pub const ALL: [SizeTag; 4] = [SizeTag::M, SizeTag::L, SizeTag::XL, SizeTag::XXL];
}

/// Price (and optionally volume) of one size of a sized item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub size: SizeTag,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// A priced entry of the price list.
///
/// Snapshots of these are supplied by the storage layer; the estimator and the
/// invoicing helpers only read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    pub category: String,
    /// Base price per unit of measure.
    pub unit_price: f64,
    pub unit: UnitOfMeasure,
    /// Cubic meters per unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disassembly_price: Option<f64>,
    /// When set, `unit_price`/`volume` are ignored in favor of the chosen variant.
    #[serde(default)]
    pub has_sizes: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<SizeVariant>,
}

impl CatalogItem {
    pub fn new(
        id: CatalogItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        unit: UnitOfMeasure,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            unit_price,
            unit,
            volume: None,
            assembly_price: None,
            disassembly_price: None,
            has_sizes: false,
            sizes: Vec::new(),
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_assembly(mut self, assembly_price: f64, disassembly_price: f64) -> Self {
        self.assembly_price = Some(assembly_price);
        self.disassembly_price = Some(disassembly_price);
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<SizeVariant>) -> Self {
        self.has_sizes = true;
        self.sizes = sizes;
        self
    }

    pub fn variant(&self, size: SizeTag) -> Option<&SizeVariant> {
        self.sizes.iter().find(|v| v.size == size)
    }

    /// Volume of one unit, honoring size variants.
    ///
    /// For sized items the base volume is ignored: the selected variant's volume
    /// is used, and no selection means no volume.
    pub fn unit_volume(&self, size: Option<SizeTag>) -> Option<f64> {
        if self.has_sizes {
            return size.and_then(|s| self.variant(s)).and_then(|v| v.volume);
        }
        self.volume
    }

    /// Price of one unit, honoring size variants (zero for an unselected size).
    pub fn unit_price_for(&self, size: Option<SizeTag>) -> f64 {
        if self.has_sizes {
            return size
                .and_then(|s| self.variant(s))
                .map(|v| v.price)
                .unwrap_or(0.0);
        }
        self.unit_price
    }

    /// Check the record is usable for pricing.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        ensure_amount("unit_price", Some(self.unit_price))?;
        ensure_amount("volume", self.volume)?;
        ensure_amount("assembly_price", self.assembly_price)?;
        ensure_amount("disassembly_price", self.disassembly_price)?;
        for variant in &self.sizes {
            ensure_amount("size price", Some(variant.price))?;
            ensure_amount("size volume", variant.volume)?;
        }
        Ok(())
    }
}

fn ensure_amount(field: &str, value: Option<f64>) -> DomainResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(DomainError::validation(format!(
            "{field} must be a non-negative number"
        ))),
        _ => Ok(()),
    }
}

impl Entity for CatalogItem {
    type Id = CatalogItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> CatalogItemId {
        CatalogItemId::new(s).unwrap()
    }

    fn wardrobe() -> CatalogItem {
        CatalogItem::new(id("w"), "Kleiderschrank", "Schlafzimmer", 140.0, UnitOfMeasure::PerPiece)
            .with_volume(2.2)
            .with_sizes(vec![
                SizeVariant { size: SizeTag::M, price: 120.0, volume: Some(1.8) },
                SizeVariant { size: SizeTag::XL, price: 200.0, volume: None },
            ])
    }

    #[test]
    fn unsized_item_uses_base_values_and_ignores_selection() {
        let item = CatalogItem::new(id("s"), "Stuhl", "Küche", 25.0, UnitOfMeasure::PerPiece)
            .with_volume(0.3);
        assert_eq!(item.unit_volume(None), Some(0.3));
        assert_eq!(item.unit_volume(Some(SizeTag::XL)), Some(0.3));
        assert_eq!(item.unit_price_for(Some(SizeTag::M)), 25.0);
    }

    #[test]
    fn sized_item_ignores_base_values() {
        let item = wardrobe();
        assert_eq!(item.unit_volume(Some(SizeTag::M)), Some(1.8));
        assert_eq!(item.unit_price_for(Some(SizeTag::M)), 120.0);

        // Variant without volume, unknown variant, and no selection.
        assert_eq!(item.unit_volume(Some(SizeTag::XL)), None);
        assert_eq!(item.unit_volume(Some(SizeTag::L)), None);
        assert_eq!(item.unit_volume(None), None);
        assert_eq!(item.unit_price_for(None), 0.0);
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_amounts() {
        let mut item = wardrobe();
        assert!(item.validate().is_ok());

        item.volume = Some(-1.0);
        assert!(matches!(item.validate(), Err(DomainError::Validation(_))));

        item.volume = None;
        item.unit_price = f64::NAN;
        assert!(item.validate().is_err());
    }

    #[test]
    fn unit_serializes_with_short_names() {
        let json = serde_json::to_string(&UnitOfMeasure::PerCubicMeter).unwrap();
        assert_eq!(json, "\"m3\"");
        let unit: UnitOfMeasure = serde_json::from_str("\"item\"").unwrap();
        assert_eq!(unit, UnitOfMeasure::PerPiece);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id":"a","name":"Karton","category":"Verpackung","unit_price":3.0,"unit":"item"}"#,
        )
        .unwrap();
        assert_eq!(item.volume, None);
        assert!(!item.has_sizes);
        assert!(item.sizes.is_empty());
    }
}
