//! Engine configuration
//!
//! Factor overrides and peer-comparison benchmarks, loadable from JSON.
//! Missing fields fall back to the reference values, so `{}` is a valid
//! configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::utils::factors::FactorTable;

/// Fixed comparison constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Benchmarks {
    /// Typical household electricity use (kWh/month)
    pub electricity_kwh_month: f64,
    /// Usage at which the electricity efficiency score reaches 0 (kWh/month)
    pub electricity_score_ceiling_kwh: f64,
    /// Average person's transport emissions (kg CO₂e/year)
    pub transport_kg_year: f64,
    /// Average water use (L/person/day)
    pub water_l_person_day: f64,
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self {
            electricity_kwh_month: 450.0,
            electricity_score_ceiling_kwh: 600.0,
            transport_kg_year: 2300.0,
            water_l_person_day: 150.0,
        }
    }
}

impl Benchmarks {
    fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("electricity_kwh_month", self.electricity_kwh_month),
            ("electricity_score_ceiling_kwh", self.electricity_score_ceiling_kwh),
            ("transport_kg_year", self.transport_kg_year),
            ("water_l_person_day", self.water_l_person_day),
        ];
        for (name, value) in fields {
            // Used as divisors
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::Config(format!(
                    "benchmark {} must be > 0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// On-disk configuration shape
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    factors: FxHashMap<String, f64>,
    benchmarks: Benchmarks,
}

/// Everything a calculation needs besides its input record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EngineConfig {
    pub factors: FactorTable,
    pub benchmarks: Benchmarks,
}

impl EngineConfig {
    /// Build from explicit parts, checking table and benchmark invariants
    pub fn new(factors: FactorTable, benchmarks: Benchmarks) -> EngineResult<Self> {
        factors.validate()?;
        benchmarks.validate()?;
        Ok(Self { factors, benchmarks })
    }

    /// Parse configuration JSON
    ///
    /// `factors` entries override the reference table key by key.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig =
            serde_json::from_str(json).with_context(|| "Failed to parse engine config JSON")?;

        let factors = FactorTable::with_overrides(&raw.factors);
        let config = Self::new(factors, raw.benchmarks)
            .with_context(|| "Engine config failed validation")?;

        tracing::debug!(
            "Loaded engine config: {} factors ({} overridden)",
            config.factors.len(),
            raw.factors.len()
        );
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config file: {:?}", path))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid engine config: {:?}", path))
    }
}
