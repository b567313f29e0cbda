use crate::error::{ensure_quantity, EngineResult};
use crate::metrics::{WaterInput, WaterResult};
use crate::suggestions::rules::{always, evaluate_rules, Rule};
use crate::suggestions::types::{CostTier, Difficulty, ImpactTier, Suggestion};
use crate::utils::{Category, EngineConfig};

/// Low-flow fixtures cut usage by roughly this share
const LOW_FLOW_REDUCTION: f64 = 0.3;
/// Shown when no calculation has run yet
const FALLBACK_LOW_FLOW_SAVINGS_KG: f64 = 20.0;

/// Values the water rules look at
#[derive(Debug, Clone, Copy)]
pub struct WaterSignals {
    /// `None` when household size is 0
    pub usage_per_person: Option<f64>,
    pub per_person_benchmark: f64,
    pub shower_minutes: f64,
    pub dishwasher_loads_week: f64,
    pub annual_emissions_kg: Option<f64>,
}

impl WaterSignals {
    pub fn new(input: &WaterInput, result: Option<&WaterResult>, config: &EngineConfig) -> EngineResult<Self> {
        ensure_quantity("daily_usage_liters", input.daily_usage_liters)?;

        Ok(Self {
            usage_per_person: input.usage_per_person(),
            per_person_benchmark: config.benchmarks.water_l_person_day,
            shower_minutes: ensure_quantity("shower_minutes", input.shower_minutes)?,
            dishwasher_loads_week: ensure_quantity("dishwasher_loads_week", input.dishwasher_loads_week)?,
            annual_emissions_kg: result.map(|r| r.annual_emissions_kg),
        })
    }
}

fn above_benchmark(s: &WaterSignals) -> bool {
    s.usage_per_person.is_some_and(|per_person| per_person > s.per_person_benchmark)
}

fn long_showers(s: &WaterSignals) -> bool {
    s.shower_minutes > 8.0
}

fn few_dishwasher_loads(s: &WaterSignals) -> bool {
    s.dishwasher_loads_week < 3.0
}

fn low_flow_fixtures(s: &WaterSignals) -> Suggestion {
    let savings = s
        .annual_emissions_kg
        .map_or(FALLBACK_LOW_FLOW_SAVINGS_KG, |annual| annual * LOW_FLOW_REDUCTION);

    Suggestion::new(Category::Water, "Install Low-Flow Fixtures")
        .impact(ImpactTier::Medium)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Low)
        .savings(savings)
        .headline("Reduce usage by 30%")
        .description("Reduce water usage by 30% without compromising shower experience.")
}

fn shorter_showers(_: &WaterSignals) -> Suggestion {
    Suggestion::new(Category::Water, "Shorter Showers")
        .impact(ImpactTier::Medium)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Free)
        .savings(15.0)
        .headline("Save 10L per minute reduced")
        .description("Cutting two minutes from each shower saves about 15 kg CO₂ a year.")
}

fn fix_leaks(_: &WaterSignals) -> Suggestion {
    Suggestion::new(Category::Water, "Fix Leaky Faucets")
        .impact(ImpactTier::Low)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Low)
        .savings(2.0)
        .headline("A drip can waste 15L/day")
        .description("Each fixed leak saves about 2 kg CO₂ a year.")
}

fn full_dishwasher_loads(_: &WaterSignals) -> Suggestion {
    Suggestion::new(Category::Water, "Full Dishwasher Loads")
        .impact(ImpactTier::Low)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Free)
        .savings(10.0)
        .headline("More efficient than hand washing")
        .description("Run the dishwasher only when full instead of washing by hand.")
}

pub const WATER_RULES: [Rule<WaterSignals>; 4] = [
    Rule { id: "water.low_flow", base_priority: 1, applies: above_benchmark, build: low_flow_fixtures },
    Rule { id: "water.shorter_showers", base_priority: 2, applies: long_showers, build: shorter_showers },
    Rule { id: "water.fix_leaks", base_priority: 3, applies: always, build: fix_leaks },
    Rule { id: "water.dishwasher", base_priority: 3, applies: few_dishwasher_loads, build: full_dishwasher_loads },
];

/// Rank water suggestions
///
/// "Fix Leaky Faucets" is always present, so the list is never empty.
pub fn rank_water(
    input: &WaterInput,
    result: Option<&WaterResult>,
    config: &EngineConfig,
) -> EngineResult<Vec<Suggestion>> {
    let signals = WaterSignals::new(input, result, config)?;
    Ok(evaluate_rules(&WATER_RULES, &signals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::calculate_water;
    use approx::assert_relative_eq;

    #[test]
    fn test_heavy_user_with_long_showers() {
        let mut input = WaterInput::new(500.0, 2);
        input.shower_minutes = 12.0;
        input.dishwasher_loads_week = 5.0;
        let config = EngineConfig::default();
        let result = calculate_water(&input, &config).unwrap();

        let list = rank_water(&input, result.as_ref(), &config).unwrap();
        let titles: Vec<&str> = list.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Install Low-Flow Fixtures", "Shorter Showers", "Fix Leaky Faucets"]);
        // 500 × 0.4 / 1000 × 365 × 0.3
        assert_relative_eq!(list[0].annual_savings_kg, 21.9, epsilon = 1e-9);
    }

    #[test]
    fn test_low_flow_fallback_without_result() {
        let input = WaterInput::new(500.0, 2);
        let list = rank_water(&input, None, &EngineConfig::default()).unwrap();
        assert_eq!(list[0].annual_savings_kg, 20.0);
    }

    #[test]
    fn test_frugal_household_keeps_static_tips() {
        let input = WaterInput::new(200.0, 2);
        let list = rank_water(&input, None, &EngineConfig::default()).unwrap();
        let titles: Vec<&str> = list.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Fix Leaky Faucets", "Full Dishwasher Loads"]);
    }

    #[test]
    fn test_negative_fields_rejected() {
        let mut input = WaterInput::new(300.0, 2);
        input.shower_minutes = -2.0;
        assert!(rank_water(&input, None, &EngineConfig::default()).is_err());

        let input = WaterInput::new(-300.0, 2);
        assert!(rank_water(&input, None, &EngineConfig::default()).is_err());
    }

    #[test]
    fn test_zero_household_skips_per_person_rule() {
        let input = WaterInput::new(500.0, 0);
        let list = rank_water(&input, None, &EngineConfig::default()).unwrap();
        assert!(list.iter().all(|s| s.title != "Install Low-Flow Fixtures"));
    }
}
