use serde::{Deserialize, Serialize};

use movebill_core::ValueObject;

use crate::draft::InvoiceItem;

/// Net amount, flat-rate tax and gross amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl ValueObject for InvoiceTotals {}

impl InvoiceTotals {
    /// Totals of invoice lines at `tax_rate_percent` (19 for 19 %).
    pub fn compute(items: &[InvoiceItem], tax_rate_percent: f64) -> Self {
        let subtotal = items.iter().map(InvoiceItem::amount).sum();
        Self::from_subtotal(subtotal, tax_rate_percent)
    }

    pub fn from_subtotal(subtotal: f64, tax_rate_percent: f64) -> Self {
        let tax = subtotal * tax_rate_percent / 100.0;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
