//! WATER: treatment and pumping emissions
//!
//! daily = litres × factor / 1000, annual = daily × 365.
//! Efficiency is judged per person: 100 at or below 100 L/day, falling
//! linearly to 0 at 300 L/day.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_quantity, EngineResult};
use crate::metrics::{default_household_size, DAYS_PER_YEAR};
use crate::utils::normalization::linear_decay_score;
use crate::utils::{EngineConfig, PeerComparison};

/// Per-person usage that still scores 100 (L/day)
pub const EFFICIENT_LITRES_PER_PERSON: f64 = 100.0;
/// Per-person usage that scores 0 (L/day)
pub const WASTEFUL_LITRES_PER_PERSON: f64 = 300.0;

/// Water factors are quoted per 1000 L
const LITRES_PER_FACTOR_UNIT: f64 = 1000.0;

/// Household water usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterInput {
    #[serde(default)]
    pub daily_usage_liters: f64,
    #[serde(default = "default_household_size")]
    pub household_size: u32,
    /// Only read by the suggestion rules
    #[serde(default)]
    pub shower_minutes: f64,
    /// Only read by the suggestion rules
    #[serde(default)]
    pub dishwasher_loads_week: f64,
}

impl WaterInput {
    pub fn new(daily_usage_liters: f64, household_size: u32) -> Self {
        Self {
            daily_usage_liters,
            household_size,
            shower_minutes: 0.0,
            dishwasher_loads_week: 0.0,
        }
    }

    /// Litres per person per day, `None` when household size is 0
    pub fn usage_per_person(&self) -> Option<f64> {
        (self.household_size > 0).then(|| self.daily_usage_liters / self.household_size as f64)
    }
}

/// Result of the water calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterResult {
    pub daily_emissions_kg: f64,
    pub annual_emissions_kg: f64,
    pub usage_per_person_liters: f64,
    /// Per-person usage against the average (L/person/day)
    pub comparison: PeerComparison,
    /// 0-100, HIGH = GOOD
    pub efficiency_score: f64,
}

/// Calculate water emissions
///
/// Returns `Ok(None)` when daily usage or household size is 0.
pub fn calculate_water(input: &WaterInput, config: &EngineConfig) -> EngineResult<Option<WaterResult>> {
    let litres = ensure_quantity("daily_usage_liters", input.daily_usage_liters)?;
    ensure_quantity("shower_minutes", input.shower_minutes)?;
    ensure_quantity("dishwasher_loads_week", input.dishwasher_loads_week)?;

    let usage_per_person = match input.usage_per_person() {
        Some(per_person) if litres > 0.0 => per_person,
        _ => {
            tracing::debug!(
                "Water input incomplete (litres={}, household_size={})",
                litres,
                input.household_size
            );
            return Ok(None);
        }
    };

    let daily_emissions_kg = litres * config.factors.water()? / LITRES_PER_FACTOR_UNIT;
    let annual_emissions_kg = daily_emissions_kg * DAYS_PER_YEAR;

    let comparison = PeerComparison::against(usage_per_person, config.benchmarks.water_l_person_day);
    let efficiency_score = linear_decay_score(
        usage_per_person,
        EFFICIENT_LITRES_PER_PERSON,
        WASTEFUL_LITRES_PER_PERSON,
    );

    Ok(Some(WaterResult {
        daily_emissions_kg,
        annual_emissions_kg,
        usage_per_person_liters: usage_per_person,
        comparison,
        efficiency_score,
    }))
}
