//! Command-line front end: reads a TOML config and JSON requests, prints JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod resolve;

pub use cli::Cli;
pub use commands::run;
pub use config::AppConfig;
