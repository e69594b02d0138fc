//! Invoicing domain module.
//!
//! Drafting invoice lines from the price list, flat-rate tax totals and
//! invoice numbering, implemented purely as deterministic domain logic (no IO,
//! no storage, no rendering).

pub mod draft;
pub mod invoice;
pub mod number;
pub mod settings;
pub mod totals;

pub use draft::{CatalogSelection, InvoiceDraft, InvoiceItem, SERVICE_CATEGORY};
pub use invoice::{Invoice, InvoiceStatus};
pub use number::InvoiceNumber;
pub use settings::InvoiceSettings;
pub use totals::InvoiceTotals;
