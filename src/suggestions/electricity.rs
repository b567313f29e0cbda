use crate::error::{ensure_quantity, EngineResult};
use crate::metrics::{ElectricityInput, ElectricityResult};
use crate::suggestions::rules::{always, evaluate_rules, Rule};
use crate::suggestions::types::{CostTier, Difficulty, ImpactTier, Suggestion};
use crate::utils::{Category, EnergySource};

/// Shown when no calculation has run yet
const FALLBACK_SWITCH_SAVINGS_KG: f64 = 200.0;

/// Values the electricity rules look at
#[derive(Debug, Clone, Copy)]
pub struct ElectricitySignals {
    /// `None` when the household has not picked a source
    pub source: Option<EnergySource>,
    pub switch_savings_kg: Option<f64>,
}

impl ElectricitySignals {
    pub fn new(input: &ElectricityInput, result: Option<&ElectricityResult>) -> EngineResult<Self> {
        ensure_quantity("monthly_usage_kwh", input.monthly_usage_kwh)?;

        let source = if input.energy_source.trim().is_empty() {
            None
        } else {
            Some(input.energy_source.parse()?)
        };

        Ok(Self {
            source,
            switch_savings_kg: result.map(|r| r.renewable_switch_savings_kg),
        })
    }
}

fn not_renewable(s: &ElectricitySignals) -> bool {
    s.source != Some(EnergySource::Renewable)
}

fn switch_to_renewable(s: &ElectricitySignals) -> Suggestion {
    Suggestion::new(Category::Electricity, "Switch to Renewable Energy")
        .impact(ImpactTier::High)
        .difficulty(Difficulty::Medium)
        .cost(CostTier::Medium)
        .savings(s.switch_savings_kg.unwrap_or(FALLBACK_SWITCH_SAVINGS_KG))
        .headline("Reduce emissions by 85%")
        .description("Move your supply to a solar or wind tariff, or install rooftop panels.")
}

fn smart_thermostat(_: &ElectricitySignals) -> Suggestion {
    Suggestion::new(Category::Electricity, "Use Smart Thermostat")
        .impact(ImpactTier::High)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Free)
        .savings(120.0)
        .headline("Optimize heating/cooling")
        .description("Lower heating by 2°C in winter and raise cooling by 2°C in summer.")
}

fn led_bulbs(_: &ElectricitySignals) -> Suggestion {
    Suggestion::new(Category::Electricity, "Switch to LED Bulbs")
        .impact(ImpactTier::Medium)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Low)
        .savings(50.0)
        .headline("Save 75% on lighting costs")
        .description("Replace incandescent bulbs with LED alternatives to reduce energy consumption by 75%.")
}

fn unplug_standby(_: &ElectricitySignals) -> Suggestion {
    Suggestion::new(Category::Electricity, "Unplug Standby Devices")
        .impact(ImpactTier::Low)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Free)
        .savings(30.0)
        .headline("Reduce phantom load by 10%")
        .description("Eliminate phantom power draw from standby devices.")
}

pub const ELECTRICITY_RULES: [Rule<ElectricitySignals>; 4] = [
    Rule { id: "electricity.renewable_switch", base_priority: 1, applies: not_renewable, build: switch_to_renewable },
    Rule { id: "electricity.smart_thermostat", base_priority: 2, applies: always, build: smart_thermostat },
    Rule { id: "electricity.led_bulbs", base_priority: 2, applies: always, build: led_bulbs },
    Rule { id: "electricity.unplug_standby", base_priority: 3, applies: always, build: unplug_standby },
];

/// Rank electricity suggestions
///
/// The renewable switch leads the list unless the household is already on
/// renewable supply; its savings come from the calculator result when given.
pub fn rank_electricity(
    input: &ElectricityInput,
    result: Option<&ElectricityResult>,
) -> EngineResult<Vec<Suggestion>> {
    let signals = ElectricitySignals::new(input, result)?;
    Ok(evaluate_rules(&ELECTRICITY_RULES, &signals))
}
