//! Move-cost estimation.
//!
//! Deterministic domain logic (no IO, no storage): an inventory of price-list
//! references plus move parameters in, a labor/transport/material breakdown out.

pub mod estimate;
pub mod rates;

pub use estimate::{CostBreakdown, CostEstimator, InventoryLine, MoveParameters, estimate};
pub use rates::PricingRates;
