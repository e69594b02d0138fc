//! TOML configuration for the `movebill` binary.
//!
//! Every section is optional:
//!
//! ```toml
//! [rates]
//! worker_hourly_rate = 38.0
//!
//! [invoice]
//! tax_rate = 19.0
//!
//! [parser]
//! order = "text_position"
//! vocabulary = ["bett", "sofa", "klavier"]
//! numerals = [{ word = "ein", value = 1 }, { word = "zwei", value = 2 }]
//!
//! [parser.items]
//! klavier = "klavier-transport"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use movebill_core::{CatalogItemId, DomainError, DomainResult};
use movebill_invoicing::InvoiceSettings;
use movebill_parser::{MatchOrder, NumeralTable, QuantityTextParser, Vocabulary};
use movebill_pricing::PricingRates;

use crate::resolve::KeywordItems;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rates: PricingRates,
    pub invoice: InvoiceSettings,
    pub parser: ParserConfig,
}

/// Parser tables; omitted tables fall back to the built-in German/English ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub vocabulary: Option<Vocabulary>,
    pub numerals: Option<NumeralTable>,
    pub order: MatchOrder,
    /// Keyword to price-list id, on top of the built-in table.
    pub items: BTreeMap<String, CatalogItemId>,
}

impl AppConfig {
    /// Load from `path`, or defaults when no file is configured.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("loading config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.rates.validate()?;
        self.invoice.validate()?;
        if self.parser.items.keys().any(|k| k.trim().is_empty()) {
            return Err(DomainError::validation("parser.items keywords cannot be empty"));
        }
        Ok(())
    }

    pub fn build_parser(&self) -> DomainResult<QuantityTextParser> {
        let vocabulary = self.parser.vocabulary.clone().unwrap_or_default();
        let numerals = self.parser.numerals.clone().unwrap_or_default();
        Ok(QuantityTextParser::new(vocabulary, numerals)?.with_order(self.parser.order))
    }

    pub fn keyword_items(&self) -> DomainResult<KeywordItems> {
        Ok(KeywordItems::defaults()?.with_overrides(&self.parser.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn sections_override_individual_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            [rates]
            worker_hourly_rate = 38.0

            [invoice]
            invoice_prefix = "RE"
            tax_rate = 7.0

            [parser]
            order = "text_position"
            vocabulary = ["Klavier", "Sofa"]
            numerals = [{ word = "ein", value = 1 }, { word = "sechs", value = 6 }]
            "#,
        )
        .unwrap();

        assert_eq!(config.rates.worker_hourly_rate, 38.0);
        assert_eq!(config.rates.truck_hourly_rate, 50.0);
        assert_eq!(config.invoice.invoice_prefix, "RE");
        assert_eq!(config.invoice.payment_terms_days, 14);
        assert_eq!(config.parser.order, MatchOrder::TextPosition);

        let parser = config.build_parser().unwrap();
        let matches = parser.parse("ein Sofa und sechs Klaviere");
        let names: Vec<_> = matches.iter().map(|m| (m.matched_name.as_str(), m.quantity)).collect();
        assert_eq!(names, vec![("sofa", 1), ("klavier", 6)]);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(AppConfig::from_toml_str("[rates]\naverage_speed_kmh = 0.0").is_err());
        assert!(AppConfig::from_toml_str("[invoice]\ntax_rate = 250.0").is_err());
        assert!(AppConfig::from_toml_str("[parser]\nvocabulary = [\"\"]").is_err());
        assert!(AppConfig::from_toml_str("[parser.items]\n\" \" = \"stuhl\"").is_err());
    }

    #[test]
    fn item_table_extends_the_built_in_one() {
        let config = AppConfig::from_toml_str(
            r#"
            [parser.items]
            Klavier = "klavier-transport"
            "#,
        )
        .unwrap();
        let items = config.keyword_items().unwrap();

        assert_eq!(items.get("klavier").map(|id| id.as_str()), Some("klavier-transport"));
        assert_eq!(items.get("couch").map(|id| id.as_str()), Some("sofa-3-sitzer"));
    }

    #[test]
    fn missing_path_means_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
        assert!(AppConfig::load(Some(Path::new("/nonexistent/movebill.toml"))).is_err());
    }
}
