use crate::error::{ensure_quantity, EngineResult};
use crate::metrics::{WasteInput, WEEKS_PER_YEAR};
use crate::suggestions::rules::{always, evaluate_rules, Rule};
use crate::suggestions::types::{CostTier, Difficulty, ImpactTier, Suggestion};
use crate::utils::{Category, EngineConfig, WasteStream};

/// Recycling rate below which diversion is suggested (%)
const RECYCLING_RATE_TARGET: f64 = 50.0;
/// Share of landfill assumed recyclable
const RECYCLABLE_SHARE: f64 = 0.5;

/// Values the waste rules look at
#[derive(Debug, Clone, Copy)]
pub struct WasteSignals {
    pub landfill_kg_week: f64,
    pub compost_kg_week: f64,
    pub recycling_rate: f64,
    /// `None` when household size is 0
    pub waste_per_person_kg: Option<f64>,
    /// Magnitude of the recycling credit per kg
    pub recycling_credit: f64,
}

impl WasteSignals {
    pub fn new(input: &WasteInput, config: &EngineConfig) -> EngineResult<Self> {
        ensure_quantity("recycled_kg_week", input.recycled_kg_week)?;

        Ok(Self {
            landfill_kg_week: ensure_quantity("landfill_kg_week", input.landfill_kg_week)?,
            compost_kg_week: ensure_quantity("compost_kg_week", input.compost_kg_week)?,
            recycling_rate: input.recycling_rate(),
            waste_per_person_kg: input.waste_per_person(),
            recycling_credit: config.factors.waste(WasteStream::Recycling)?.abs(),
        })
    }
}

fn low_recycling_rate(s: &WasteSignals) -> bool {
    s.landfill_kg_week > 0.0 && s.recycling_rate < RECYCLING_RATE_TARGET
}

fn little_compost(s: &WasteSignals) -> bool {
    s.compost_kg_week < 2.0
}

fn heavy_per_person(s: &WasteSignals) -> bool {
    s.waste_per_person_kg.is_some_and(|kg| kg > 2.0)
}

fn increase_recycling(s: &WasteSignals) -> Suggestion {
    Suggestion::new(Category::Waste, "Increase Recycling")
        .impact(ImpactTier::High)
        .difficulty(Difficulty::Medium)
        .cost(CostTier::Free)
        .savings(s.landfill_kg_week * s.recycling_credit * RECYCLABLE_SHARE * WEEKS_PER_YEAR)
        .headline("Divert waste from landfills")
        .description("Sort paper, glass, metal and plastics out of the general bin.")
}

fn start_composting(_: &WasteSignals) -> Suggestion {
    Suggestion::new(Category::Waste, "Start Composting")
        .impact(ImpactTier::Medium)
        .difficulty(Difficulty::Medium)
        .cost(CostTier::Low)
        .savings(50.0)
        .headline("Reduce methane emissions")
        .description("Compost organic waste to reduce methane emissions from landfills.")
}

fn reduce_packaging(_: &WasteSignals) -> Suggestion {
    Suggestion::new(Category::Waste, "Reduce Packaging")
        .impact(ImpactTier::Medium)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Free)
        .savings(30.0)
        .headline("Buy bulk, avoid single-use")
        .description("Choose loose produce and refillable containers.")
}

fn repair_instead_of_replace(_: &WasteSignals) -> Suggestion {
    Suggestion::new(Category::Waste, "Repair Instead of Replace")
        .impact(ImpactTier::Medium)
        .difficulty(Difficulty::Medium)
        .cost(CostTier::Low)
        .savings(100.0)
        .headline("Extend product lifecycles")
        .description("Fix clothing, furniture and electronics before buying new.")
}

pub const WASTE_RULES: [Rule<WasteSignals>; 4] = [
    Rule { id: "waste.increase_recycling", base_priority: 1, applies: low_recycling_rate, build: increase_recycling },
    Rule { id: "waste.start_composting", base_priority: 2, applies: little_compost, build: start_composting },
    Rule { id: "waste.reduce_packaging", base_priority: 2, applies: heavy_per_person, build: reduce_packaging },
    Rule { id: "waste.repair", base_priority: 3, applies: always, build: repair_instead_of_replace },
];

/// Rank waste suggestions
///
/// Always ends with "Repair Instead of Replace".
pub fn rank_waste(input: &WasteInput, config: &EngineConfig) -> EngineResult<Vec<Suggestion>> {
    let signals = WasteSignals::new(input, config)?;
    Ok(evaluate_rules(&WASTE_RULES, &signals))
}
