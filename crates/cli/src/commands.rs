use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use movebill_catalog::{Catalog, CatalogItem, CatalogProvider, SeedCatalog};
use movebill_invoicing::InvoiceTotals;
use movebill_parser::ParsedMatch;
use movebill_pricing::{CostBreakdown, CostEstimator, InventoryLine, MoveParameters};

use crate::cli::{Cli, Command, EstimateArgs, ParseArgs, PriceListArgs};
use crate::config::AppConfig;
use crate::resolve::resolve_description;

/// Body of `--request` for `estimate` and `quote`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub lines: Vec<InventoryLine>,
    pub params: MoveParameters,
    /// Free text whose recognized items are added to `lines`.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateOutput {
    pub breakdown: CostBreakdown,
    /// Parsed mentions that matched no price-list entry.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub breakdown: CostBreakdown,
    pub totals: InvoiceTotals,
    pub tax_rate: f64,
    pub currency: String,
}

/// Execute a parsed command line; returns the JSON to print.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let json = match &cli.command {
        Command::Estimate(args) => serde_json::to_string_pretty(&estimate(&config, args)?)?,
        Command::Quote(args) => serde_json::to_string_pretty(&quote(&config, args)?)?,
        Command::Parse(args) => serde_json::to_string_pretty(&parse(&config, args)?)?,
        Command::PriceList(args) => serde_json::to_string_pretty(&price_list(args)?)?,
    };
    Ok(json)
}

pub fn estimate(config: &AppConfig, args: &EstimateArgs) -> anyhow::Result<EstimateOutput> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let request: EstimateRequest = read_json(&args.request)?;

    let mut lines = request.lines;
    let mut unresolved = Vec::new();
    if let Some(text) = request.description.as_deref() {
        let parser = config.build_parser()?;
        let items = config.keyword_items()?;
        let (parsed, missing) = resolve_description(&parser, &catalog, &items, text);
        lines.extend(parsed);
        unresolved = missing;
    }

    let estimator = CostEstimator::with_rates(&catalog, config.rates)?;
    let breakdown = estimator.estimate(&lines, &request.params)?;
    tracing::info!(lines = lines.len(), total = breakdown.total, "estimate computed");

    Ok(EstimateOutput {
        breakdown,
        unresolved,
    })
}

pub fn quote(config: &AppConfig, args: &EstimateArgs) -> anyhow::Result<Quote> {
    let EstimateOutput { breakdown, .. } = estimate(config, args)?;
    let tax_rate = config.invoice.tax_rate;
    Ok(Quote {
        breakdown,
        totals: InvoiceTotals::from_subtotal(breakdown.total, tax_rate),
        tax_rate,
        currency: config.invoice.currency.clone(),
    })
}

pub fn parse(config: &AppConfig, args: &ParseArgs) -> anyhow::Result<Vec<ParsedMatch>> {
    let mut parser = config.build_parser()?;
    if let Some(order) = args.order {
        parser = parser.with_order(order.into());
    }
    Ok(parser.parse(&args.text))
}

pub fn price_list(args: &PriceListArgs) -> anyhow::Result<Vec<CatalogItem>> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    Ok(catalog
        .search(&args.search, args.category.as_deref())
        .into_iter()
        .cloned()
        .collect())
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let provider: Box<dyn CatalogProvider> = match path {
        Some(path) => Box::new(read_json::<Catalog>(path)?),
        None => Box::new(SeedCatalog),
    };
    let catalog = provider.snapshot()?;
    catalog.validate().context("invalid price list")?;
    Ok(catalog)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
