use serde::{Deserialize, Serialize};

use movebill_catalog::{CatalogItem, SizeTag, UnitOfMeasure};
use movebill_core::{DomainError, DomainResult, Entity, InvoiceItemId};

/// Category used for assembly/disassembly lines.
pub const SERVICE_CATEGORY: &str = "Dienstleistungen";

/// One line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub description: String,
    pub quantity: u32,
    /// Price per unit.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl InvoiceItem {
    pub fn amount(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Entity for InvoiceItem {
    type Id = InvoiceItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// How a price-list entry goes onto an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSelection {
    /// Size variant to bill for sized entries.
    pub size: Option<SizeTag>,
    pub include_assembly: bool,
    pub include_disassembly: bool,
}

/// Invoice lines being assembled before the invoice is issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceDraft {
    items: Vec<InvoiceItem>,
}

impl InvoiceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a price-list entry (quantity 1).
    ///
    /// Assembly and disassembly become separate service lines, and only when
    /// requested and the entry defines the surcharge. Returns the ids of the
    /// lines added, item line first.
    pub fn add_catalog_item(
        &mut self,
        item: &CatalogItem,
        selection: CatalogSelection,
    ) -> DomainResult<Vec<InvoiceItemId>> {
        let (description, price) = match (item.has_sizes, selection.size) {
            (true, Some(size)) => {
                let variant = item.variant(size).ok_or_else(|| {
                    DomainError::validation(format!("{} has no size {size:?}", item.name))
                })?;
                (format!("{} ({size:?})", item.name), variant.price)
            }
            (true, None) => {
                return Err(DomainError::validation(format!(
                    "{} requires a size selection",
                    item.name
                )));
            }
            (false, _) => (item.name.clone(), item.unit_price),
        };

        let mut added = vec![self.push(InvoiceItem {
            id: InvoiceItemId::new(),
            description,
            quantity: 1,
            price,
            unit: Some(item.unit.invoice_label().to_string()),
            category: Some(item.category.clone()),
        })];

        let services = [
            (selection.include_assembly, item.assembly_price, "Montage"),
            (selection.include_disassembly, item.disassembly_price, "Demontage"),
        ];
        for (wanted, surcharge, label) in services {
            if let (true, Some(price)) = (wanted, surcharge) {
                added.push(self.push(InvoiceItem {
                    id: InvoiceItemId::new(),
                    description: format!("{label}: {}", item.name),
                    quantity: 1,
                    price,
                    unit: Some(UnitOfMeasure::PerPiece.invoice_label().to_string()),
                    category: Some(SERVICE_CATEGORY.to_string()),
                }));
            }
        }
        Ok(added)
    }

    /// Add a free-form line.
    pub fn add_custom_item(
        &mut self,
        description: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> DomainResult<InvoiceItemId> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        ensure_quantity(quantity)?;
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }
        Ok(self.push(InvoiceItem {
            id: InvoiceItemId::new(),
            description,
            quantity,
            price,
            unit: None,
            category: None,
        }))
    }

    pub fn remove_item(&mut self, id: InvoiceItemId) -> DomainResult<InvoiceItem> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    pub fn set_quantity(&mut self, id: InvoiceItemId, quantity: u32) -> DomainResult<()> {
        ensure_quantity(quantity)?;
        let index = self.position(id)?;
        self.items[index].quantity = quantity;
        Ok(())
    }

    pub(crate) fn into_items(self) -> Vec<InvoiceItem> {
        self.items
    }

    fn push(&mut self, item: InvoiceItem) -> InvoiceItemId {
        let id = item.id;
        self.items.push(item);
        id
    }

    fn position(&self, id: InvoiceItemId) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(DomainError::not_found)
    }
}

fn ensure_quantity(quantity: u32) -> DomainResult<()> {
    if quantity == 0 {
        return Err(DomainError::validation("quantity must be at least 1"));
    }
    Ok(())
}
