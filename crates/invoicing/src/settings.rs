use serde::{Deserialize, Serialize};

use movebill_core::{DomainError, DomainResult};

use crate::number::InvoiceNumber;

/// Company-wide invoicing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceSettings {
    pub invoice_prefix: String,
    /// Lowest sequence the next invoice may get; raising it skips ahead.
    pub next_number: u32,
    /// Flat VAT rate in percent.
    pub tax_rate: f64,
    pub payment_terms_days: u32,
    pub currency: String,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            invoice_prefix: "INV".to_string(),
            next_number: 1,
            tax_rate: 19.0,
            payment_terms_days: 14,
            currency: "EUR".to_string(),
        }
    }
}

impl InvoiceSettings {
    pub fn validate(&self) -> DomainResult<()> {
        if !self.tax_rate.is_finite() || !(0.0..=100.0).contains(&self.tax_rate) {
            return Err(DomainError::validation("tax_rate must be between 0 and 100"));
        }
        if self.currency.len() != 3 || !self.currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(
                "currency must be a three-letter ISO code",
            ));
        }
        self.configured_next_number().map(|_| ())
    }

    /// The number configured in `next_number`, with this prefix.
    pub fn configured_next_number(&self) -> DomainResult<InvoiceNumber> {
        InvoiceNumber::new(self.invoice_prefix.clone(), self.next_number)
    }

    /// Number for a new invoice given the numbers already issued.
    ///
    /// Continues the configured prefix's series, but never below `next_number`.
    pub fn next_invoice_number<'a, I>(&self, existing: I) -> DomainResult<InvoiceNumber>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let following = InvoiceNumber::next_after(&self.invoice_prefix, existing)?;
        let configured = self.configured_next_number()?;
        if configured.sequence() > following.sequence() {
            Ok(configured)
        } else {
            Ok(following)
        }
    }
}
