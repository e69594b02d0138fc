use clap::Parser;

use movebill_cli::Cli;
use movebill_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        movebill_observability::init_with(LogFormat::Pretty, "debug");
    } else {
        movebill_observability::init_with(LogFormat::Json, "warn");
    }

    let output = movebill_cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
