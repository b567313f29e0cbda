//! What-If Evaluator
//!
//! Marginal savings of changing one weekly quantity:
//! `annual = (current − new) × factor × 52`.
//! Nothing is clamped or rounded here. Raising usage yields a negative
//! saving, which callers are expected to show as such.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_quantity, EngineError, EngineResult};
use crate::metrics::WEEKS_PER_YEAR;
use crate::utils::normalization::share_percent;
use crate::utils::{EngineConfig, TransportMode};

/// One variable, before and after
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfScenario {
    /// Free-form label, e.g. "car"
    pub category: String,
    pub current_value: f64,
    pub new_value: f64,
    /// e.g. "km/week"
    pub unit: String,
    /// kg CO₂e per unit
    pub emission_factor: f64,
}

impl WhatIfScenario {
    pub fn new(current_value: f64, new_value: f64, emission_factor: f64) -> Self {
        Self {
            category: String::new(),
            current_value,
            new_value,
            unit: String::new(),
            emission_factor,
        }
    }

    /// Scenario for a weekly travel distance, factor taken from the table
    pub fn for_transport_mode(
        mode: TransportMode,
        current_value: f64,
        new_value: f64,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        if mode == TransportMode::Flight {
            // Flight hours are annual; a weekly what-if would re-annualize them
            return Err(EngineError::Unsupported("what-if on annual flight hours"));
        }

        Ok(Self {
            category: mode.subtype().to_string(),
            current_value,
            new_value,
            unit: mode.unit().to_string(),
            emission_factor: config.factors.transport(mode)?,
        })
    }
}

/// Savings implied by a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfOutcome {
    /// current − new; negative when usage goes up
    pub reduction: f64,
    pub weekly_savings_kg: f64,
    pub annual_savings_kg: f64,
    /// reduction / current × 100, 0 when current is 0
    pub percent_change: f64,
}

/// Evaluate a what-if scenario
pub fn evaluate_what_if(scenario: &WhatIfScenario) -> EngineResult<WhatIfOutcome> {
    let current = ensure_quantity("current_value", scenario.current_value)?;
    let new_value = ensure_quantity("new_value", scenario.new_value)?;
    let factor = ensure_quantity("emission_factor", scenario.emission_factor)?;

    let reduction = current - new_value;
    let weekly_savings_kg = reduction * factor;

    Ok(WhatIfOutcome {
        reduction,
        weekly_savings_kg,
        annual_savings_kg: weekly_savings_kg * WEEKS_PER_YEAR,
        percent_change: if current > 0.0 {
            share_percent(reduction, current)
        } else {
            0.0
        },
    })
}
