//! ELECTRICITY: household grid consumption
//!
//! monthly = kWh × factor(source), annual = monthly × 12.
//! Compared against a typical household (450 kWh/month by default) and
//! scored linearly from 100 at 0 kWh down to 0 at the score ceiling.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_quantity, EngineResult};
use crate::metrics::{default_household_size, MONTHS_PER_YEAR};
use crate::utils::normalization::linear_decay_score;
use crate::utils::{EnergySource, EngineConfig, PeerComparison};

/// Monthly electricity usage as entered by the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityInput {
    #[serde(default)]
    pub monthly_usage_kwh: f64,
    /// Energy source subtype, e.g. "coal" or "renewable"; empty when not chosen
    #[serde(default)]
    pub energy_source: String,
    #[serde(default = "default_household_size")]
    pub household_size: u32,
}

impl ElectricityInput {
    pub fn new(monthly_usage_kwh: f64, energy_source: &str) -> Self {
        Self {
            monthly_usage_kwh,
            energy_source: energy_source.to_string(),
            household_size: 1,
        }
    }

    pub fn with_household_size(mut self, household_size: u32) -> Self {
        self.household_size = household_size;
        self
    }
}

/// Usage up to this is rated Excellent (kWh/month)
const EXCELLENT_MAX_KWH: f64 = 400.0;
/// Usage up to this is rated Good (kWh/month)
const GOOD_MAX_KWH: f64 = 500.0;

/// Qualitative band shown next to the efficiency score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl EfficiencyRating {
    /// Bands are inclusive at the upper edge: 400 is Excellent, 500 is Good
    pub fn from_usage(monthly_kwh: f64) -> Self {
        if monthly_kwh <= EXCELLENT_MAX_KWH {
            EfficiencyRating::Excellent
        } else if monthly_kwh <= GOOD_MAX_KWH {
            EfficiencyRating::Good
        } else {
            EfficiencyRating::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyRating::Excellent => "Excellent",
            EfficiencyRating::Good => "Good",
            EfficiencyRating::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Result of the electricity calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityResult {
    pub energy_source: EnergySource,
    /// kg CO₂e per month
    pub monthly_emissions_kg: f64,
    /// kg CO₂e per year
    pub annual_emissions_kg: f64,
    /// Usage against the typical household (kWh/month)
    pub comparison: PeerComparison,
    /// 0-100, HIGH = GOOD
    pub efficiency_score: f64,
    pub efficiency_rating: EfficiencyRating,
    /// Annual kg CO₂e avoided by switching to renewable supply, never negative
    pub renewable_switch_savings_kg: f64,
    pub usage_per_person_kwh: f64,
}

/// Annual savings from moving `monthly_kwh` onto renewable supply
///
/// Clamped at 0: a source already at or below the renewable factor has
/// nothing to gain.
pub fn renewable_switch_savings(monthly_kwh: f64, current_factor: f64, renewable_factor: f64) -> f64 {
    (monthly_kwh * (current_factor - renewable_factor) * MONTHS_PER_YEAR).max(0.0)
}

/// Calculate electricity emissions
///
/// Returns `Ok(None)` when usage is 0 or no source was selected.
/// An unrecognised source is an error, never a fallback factor.
pub fn calculate_electricity(
    input: &ElectricityInput,
    config: &EngineConfig,
) -> EngineResult<Option<ElectricityResult>> {
    let usage = ensure_quantity("monthly_usage_kwh", input.monthly_usage_kwh)?;

    if usage == 0.0 || input.energy_source.trim().is_empty() {
        tracing::debug!("Electricity input incomplete (usage={}, source='{}')", usage, input.energy_source);
        return Ok(None);
    }

    let source: EnergySource = input.energy_source.parse()?;
    let factor = config.factors.electricity(source)?;
    let renewable_factor = config.factors.electricity(EnergySource::Renewable)?;

    let monthly_emissions_kg = usage * factor;
    let annual_emissions_kg = monthly_emissions_kg * MONTHS_PER_YEAR;

    let benchmarks = &config.benchmarks;
    let comparison = PeerComparison::against(usage, benchmarks.electricity_kwh_month);
    let efficiency_score = linear_decay_score(usage, 0.0, benchmarks.electricity_score_ceiling_kwh);

    Ok(Some(ElectricityResult {
        energy_source: source,
        monthly_emissions_kg,
        annual_emissions_kg,
        comparison,
        efficiency_score,
        efficiency_rating: EfficiencyRating::from_usage(usage),
        renewable_switch_savings_kg: renewable_switch_savings(usage, factor, renewable_factor),
        usage_per_person_kwh: usage / input.household_size.max(1) as f64,
    }))
}
