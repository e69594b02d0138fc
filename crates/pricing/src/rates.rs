use serde::{Deserialize, Serialize};

use movebill_core::{DomainError, DomainResult};

/// Tunable constants of the move-cost model.
///
/// `Default` is the Hamburg tariff the business quotes with today. All
/// amounts are in the single billing currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRates {
    /// Labor hours per cubic meter for a single worker.
    pub hours_per_cubic_meter: f64,
    /// Extra labor fraction per floor when there is no elevator (linear, applied once).
    pub floor_penalty_per_floor: f64,
    /// Assumed truck speed used to derive driving time.
    pub average_speed_kmh: f64,
    pub worker_hourly_rate: f64,
    /// Regional adjustment applied to labor cost.
    pub market_multiplier: f64,
    pub truck_hourly_rate: f64,
    pub fuel_rate_per_km: f64,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            hours_per_cubic_meter: 0.5,
            floor_penalty_per_floor: 0.1,
            average_speed_kmh: 50.0,
            worker_hourly_rate: 35.0,
            market_multiplier: 1.09,
            truck_hourly_rate: 50.0,
            fuel_rate_per_km: 0.5,
        }
    }
}

impl PricingRates {
    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("hours_per_cubic_meter", self.hours_per_cubic_meter),
            ("floor_penalty_per_floor", self.floor_penalty_per_floor),
            ("average_speed_kmh", self.average_speed_kmh),
            ("worker_hourly_rate", self.worker_hourly_rate),
            ("market_multiplier", self.market_multiplier),
            ("truck_hourly_rate", self.truck_hourly_rate),
            ("fuel_rate_per_km", self.fuel_rate_per_km),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::invalid_parameter(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        if self.average_speed_kmh == 0.0 {
            return Err(DomainError::invalid_parameter("average_speed_kmh must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        PricingRates::default().validate().unwrap();
    }

    #[test]
    fn zero_speed_is_rejected() {
        let rates = PricingRates {
            average_speed_kmh: 0.0,
            ..PricingRates::default()
        };
        assert!(matches!(rates.validate(), Err(DomainError::InvalidParameter(_))));
    }

    #[test]
    fn negative_or_nan_rate_is_rejected() {
        let rates = PricingRates {
            fuel_rate_per_km: -0.5,
            ..PricingRates::default()
        };
        assert!(rates.validate().is_err());

        let rates = PricingRates {
            market_multiplier: f64::NAN,
            ..PricingRates::default()
        };
        assert!(rates.validate().is_err());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let rates: PricingRates = serde_json::from_str(r#"{"worker_hourly_rate": 40.0}"#).unwrap();
        assert_eq!(rates.worker_hourly_rate, 40.0);
        assert_eq!(rates.truck_hourly_rate, 50.0);
        assert_eq!(rates.market_multiplier, 1.09);
    }
}
