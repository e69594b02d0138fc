use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use movebill_parser::MatchOrder;

#[derive(Debug, Parser)]
#[command(name = "movebill", version, about = "Move cost estimates and quantity parsing")]
pub struct Cli {
    /// TOML file with [rates], [invoice] and [parser] sections.
    #[arg(long, global = true, env = "MOVEBILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Human-readable debug logs on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate labor, transport and material cost of a move.
    Estimate(EstimateArgs),
    /// Estimate plus flat-rate tax, as quoted to the customer.
    Quote(EstimateArgs),
    /// Extract item quantities from a free-text description.
    Parse(ParseArgs),
    /// Show the price list.
    PriceList(PriceListArgs),
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// JSON request: { "lines": [...], "params": {...}, "description": "..." }.
    #[arg(long)]
    pub request: PathBuf,

    /// JSON price list; the built-in price list is used when omitted.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    pub text: String,

    /// Overrides the configured match order.
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,
}

#[derive(Debug, Args)]
pub struct PriceListArgs {
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive name filter.
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Vocabulary,
    Text,
}

impl From<OrderArg> for MatchOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Vocabulary => MatchOrder::Vocabulary,
            OrderArg::Text => MatchOrder::TextPosition,
        }
    }
}
