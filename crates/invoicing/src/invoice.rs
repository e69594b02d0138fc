use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use movebill_core::{ClientId, DomainError, DomainResult, Entity, InvoiceId};

use crate::draft::{InvoiceDraft, InvoiceItem};
use crate::number::InvoiceNumber;
use crate::settings::InvoiceSettings;
use crate::totals::InvoiceTotals;

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// An issued invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    client_id: ClientId,
    number: InvoiceNumber,
    date: NaiveDate,
    due_date: NaiveDate,
    items: Vec<InvoiceItem>,
    totals: InvoiceTotals,
    currency: String,
    status: InvoiceStatus,
}

impl Invoice {
    /// Turn a draft into an invoice.
    ///
    /// A client and at least one line are required; invoices start as either
    /// `Draft` or `Sent`. The due date is `date` plus the payment terms.
    pub fn issue(
        draft: InvoiceDraft,
        client_id: Option<ClientId>,
        number: InvoiceNumber,
        date: NaiveDate,
        settings: &InvoiceSettings,
        status: InvoiceStatus,
    ) -> DomainResult<Self> {
        settings.validate()?;
        let client_id = client_id.ok_or_else(|| DomainError::validation("client is required"))?;
        if draft.is_empty() {
            return Err(DomainError::validation("invoice needs at least one item"));
        }
        if !matches!(status, InvoiceStatus::Draft | InvoiceStatus::Sent) {
            return Err(DomainError::invariant("new invoices are either draft or sent"));
        }
        let due_date = date
            .checked_add_days(Days::new(u64::from(settings.payment_terms_days)))
            .ok_or_else(|| DomainError::validation("due date out of range"))?;

        let items = draft.into_items();
        let totals = InvoiceTotals::compute(&items, settings.tax_rate);

        Ok(Self {
            id: InvoiceId::new(),
            client_id,
            number,
            date,
            due_date,
            items,
            totals,
            currency: settings.currency.clone(),
            status,
        })
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn mark_sent(&mut self) -> DomainResult<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(DomainError::invariant("only draft invoices can be sent"));
        }
        self.status = InvoiceStatus::Sent;
        Ok(())
    }

    pub fn mark_paid(&mut self) -> DomainResult<()> {
        if self.status == InvoiceStatus::Draft {
            return Err(DomainError::invariant("draft invoices cannot be paid"));
        }
        self.status = InvoiceStatus::Paid;
        Ok(())
    }

    /// Sent invoices past their due date become overdue. Returns whether the status changed.
    pub fn refresh_overdue(&mut self, today: NaiveDate) -> bool {
        if self.status == InvoiceStatus::Sent && today > self.due_date {
            self.status = InvoiceStatus::Overdue;
            return true;
        }
        false
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
