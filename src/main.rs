//! abcompute CLI - sample size curves for A/B tests.

mod cli;

use abcompute::chart::ChartData;
use abcompute::compute::{CalculatorConfig, compute_sample_size};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, OutputFormat};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {path}"))?;
            debug!(path = %path, "loaded config file");
            CalculatorConfig::from_toml_str(&raw)?
        }
        None => CalculatorConfig::default(),
    };

    let params = cli.command.test_parameters();
    info!(?params, "computing sample size");
    let calc = compute_sample_size(&params, &config)?;
    let chart = ChartData::from_calculation(&calc, &params);

    match cli.format {
        OutputFormat::Table => print!("{}", chart.to_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
    }
    Ok(())
}
