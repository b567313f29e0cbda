//! Footprint Summary
//!
//! Rolls whichever category results are available into one annual total and a
//! per-category share. Waste enters with its signed value, so a household that
//! diverts enough waste lowers its total.

use serde::{Deserialize, Serialize};

use crate::metrics::{ElectricityResult, TransportResult, WasteResult, WaterResult};
use crate::utils::breakdown::apportion_percentages;
use crate::utils::Category;

const KG_PER_TONNE: f64 = 1000.0;

/// One category's contribution to the household total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    /// Signed kg CO₂e per year
    pub annual_emissions_kg: f64,
    /// Whole-number share of the emitting categories; 0 for net savers
    pub percentage: f64,
}

/// Household-level roll-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintSummary {
    pub total_annual_kg: f64,
    pub total_tonnes: f64,
    /// Only categories that produced a result, in fixed category order
    pub categories: Vec<CategoryShare>,
    /// Largest emitting category, `None` when nothing emits
    pub dominant_category: Option<Category>,
    pub categories_reported: usize,
}

impl FootprintSummary {
    pub fn from_results(
        electricity: Option<&ElectricityResult>,
        transport: Option<&TransportResult>,
        water: Option<&WaterResult>,
        waste: Option<&WasteResult>,
    ) -> Self {
        let reported: Vec<(Category, f64)> = [
            (Category::Electricity, electricity.map(|r| r.annual_emissions_kg)),
            (Category::Transport, transport.map(|r| r.annual_emissions_kg)),
            (Category::Water, water.map(|r| r.annual_emissions_kg)),
            (Category::Waste, waste.map(|r| r.annual_emissions_kg)),
        ]
        .into_iter()
        .filter_map(|(category, annual)| annual.map(|kg| (category, kg)))
        .collect();

        let emitting: Vec<f64> = reported.iter().map(|(_, kg)| kg.max(0.0)).collect();
        let shares = apportion_percentages(&emitting);

        let dominant_category = reported
            .iter()
            .filter(|(_, kg)| *kg > 0.0)
            .fold(None::<(Category, f64)>, |best, &(category, kg)| match best {
                Some((_, best_kg)) if best_kg >= kg => best,
                _ => Some((category, kg)),
            })
            .map(|(category, _)| category);

        let total_annual_kg: f64 = reported.iter().map(|(_, kg)| kg).sum();

        let categories = reported
            .iter()
            .zip(shares)
            .map(|(&(category, kg), share)| CategoryShare {
                category,
                annual_emissions_kg: kg,
                percentage: share as f64,
            })
            .collect();

        Self {
            total_annual_kg,
            total_tonnes: total_annual_kg / KG_PER_TONNE,
            categories,
            dominant_category,
            categories_reported: reported.len(),
        }
    }

    pub fn share_of(&self, category: Category) -> Option<&CategoryShare> {
        self.categories.iter().find(|c| c.category == category)
    }
}
