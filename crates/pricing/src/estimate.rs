use serde::{Deserialize, Serialize};

use movebill_catalog::{Catalog, SizeTag, UnitOfMeasure};
use movebill_core::{CatalogItemId, DomainError, DomainResult, ValueObject};

use crate::rates::PricingRates;

/// A requested quantity of one price-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub item_id: CatalogItemId,
    pub quantity: u32,
    /// Only consulted for items with size variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeTag>,
}

impl InventoryLine {
    pub fn new(item_id: CatalogItemId, quantity: u32) -> Self {
        Self {
            item_id,
            quantity,
            size: None,
        }
    }

    pub fn sized(item_id: CatalogItemId, quantity: u32, size: SizeTag) -> Self {
        Self {
            item_id,
            quantity,
            size: Some(size),
        }
    }
}

/// Parameters of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveParameters {
    pub distance_km: f64,
    /// Only used when there is no elevator.
    #[serde(default)]
    pub floors: u32,
    #[serde(default)]
    pub has_elevator: bool,
    pub crew_size: u32,
    /// Caller-supplied lower bound for the billed time.
    #[serde(default)]
    pub minimum_hours: f64,
}

/// Result of [`CostEstimator::estimate`].
///
/// Amounts are unrounded; callers round for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Cubic meters.
    pub total_volume: f64,
    /// Loading/unloading estimate before the caller's minimum is applied.
    pub labor_hours: f64,
    pub driving_hours: f64,
    /// Billed hours.
    pub total_hours: f64,
    pub labor_cost: f64,
    pub transport_cost: f64,
    pub material_cost: f64,
    pub total: f64,
}

impl ValueObject for CostBreakdown {}

/// Turns an inventory plus move parameters into a cost breakdown.
///
/// Pure: reads the catalog snapshot and the arguments, nothing else.
///
/// Lines whose id is not in the catalog are skipped rather than rejected, both
/// for volume and for material cost. Assembly and disassembly surcharges are
/// not part of the estimate; invoice drafting adds them as separate lines.
#[derive(Debug, Clone)]
pub struct CostEstimator<'a> {
    catalog: &'a Catalog,
    rates: PricingRates,
}

impl<'a> CostEstimator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            rates: PricingRates::default(),
        }
    }

    pub fn with_rates(catalog: &'a Catalog, rates: PricingRates) -> DomainResult<Self> {
        rates.validate()?;
        Ok(Self { catalog, rates })
    }

    pub fn rates(&self) -> &PricingRates {
        &self.rates
    }

    /// Total volume in cubic meters.
    ///
    /// Unknown ids and items without a volume contribute zero.
    pub fn compute_volume(&self, lines: &[InventoryLine]) -> f64 {
        lines
            .iter()
            .filter_map(|line| {
                let Some(item) = self.catalog.get(&line.item_id) else {
                    tracing::debug!(item_id = %line.item_id, "skipping unknown catalog item");
                    return None;
                };
                item.unit_volume(line.size)
                    .map(|volume| volume * f64::from(line.quantity))
            })
            .sum()
    }

    pub fn estimate(
        &self,
        lines: &[InventoryLine],
        params: &MoveParameters,
    ) -> DomainResult<CostBreakdown> {
        if params.crew_size == 0 {
            return Err(DomainError::invalid_parameter("crew_size must be at least 1"));
        }
        let rates = &self.rates;
        let crew = f64::from(params.crew_size);

        let total_volume = self.compute_volume(lines);

        let mut labor_hours = total_volume * rates.hours_per_cubic_meter / crew;
        if !params.has_elevator {
            labor_hours *= 1.0 + f64::from(params.floors) * rates.floor_penalty_per_floor;
        }

        let driving_hours = params.distance_km / rates.average_speed_kmh;
        let total_hours = params.minimum_hours.max(labor_hours + driving_hours);

        let labor_cost =
            total_hours * crew * rates.worker_hourly_rate * rates.market_multiplier;
        let transport_cost =
            total_hours * rates.truck_hourly_rate + params.distance_km * rates.fuel_rate_per_km;
        let material_cost = self.material_cost(lines);

        tracing::debug!(
            lines = lines.len(),
            total_volume,
            total_hours,
            "estimated move cost"
        );

        Ok(CostBreakdown {
            total_volume,
            labor_hours,
            driving_hours,
            total_hours,
            labor_cost,
            transport_cost,
            material_cost,
            total: labor_cost + transport_cost + material_cost,
        })
    }

    /// Per-piece items only; hourly, volume and distance tariffs never count here.
    fn material_cost(&self, lines: &[InventoryLine]) -> f64 {
        lines
            .iter()
            .filter_map(|line| {
                let item = self.catalog.get(&line.item_id)?;
                (item.unit == UnitOfMeasure::PerPiece)
                    .then(|| item.unit_price_for(line.size) * f64::from(line.quantity))
            })
            .sum()
    }
}

/// One-shot form of [`CostEstimator::estimate`] with default rates.
pub fn estimate(
    catalog: &Catalog,
    lines: &[InventoryLine],
    params: &MoveParameters,
) -> DomainResult<CostBreakdown> {
    CostEstimator::new(catalog).estimate(lines, params)
}
