// Household footprint report
//
// Usage: cargo run --features cli --bin footprint_report -- <household.json> [config.json]
// Log level via RUST_LOG (default: footprint_engine=info)

use anyhow::{bail, Context, Result};
use footprint_engine::{assess_household, EngineConfig, HouseholdInput};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "footprint_engine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        bail!(usage(&args));
    }

    let household_path = Path::new(&args[1]);
    let household_json = std::fs::read_to_string(household_path)
        .with_context(|| format!("Failed to read household file: {:?}", household_path))?;
    let household: HouseholdInput = serde_json::from_str(&household_json)
        .with_context(|| format!("Failed to parse household file: {:?}", household_path))?;

    let config = match args.get(2) {
        Some(path) => EngineConfig::load(Path::new(path))?,
        None => EngineConfig::default(),
    };

    tracing::info!("Assessing household from {:?}", household_path);
    let report = assess_household(&household, &config)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Usage line; argv can be empty when the process is spawned without a name
fn usage(args: &[String]) -> String {
    let program = args.first().map_or("footprint_report", String::as_str);
    format!("usage: {} <household.json> [config.json]", program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_without_program_name() {
        assert_eq!(usage(&[]), "usage: footprint_report <household.json> [config.json]");
        assert_eq!(
            usage(&["./report".to_string()]),
            "usage: ./report <household.json> [config.json]"
        );
    }
}
